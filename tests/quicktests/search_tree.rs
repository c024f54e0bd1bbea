use std::collections::BTreeSet;

use bintree::{BinarySearchTree, TreeShape};

use crate::Op;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicate_add_keeps_count(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let count = tree.num_nodes();

    xs.iter().all(|x| !tree.add(*x)) && tree.num_nodes() == count
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let still_present: BTreeSet<_> = xs.into_iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.inorder().eq(still_present.iter())
}

#[quickcheck]
fn sorted_after_any_ops(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut snapshots = Vec::new();

    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x);
            }
            Op::Remove(x) => {
                tree.remove(&x);
            }
            Op::Snapshot => snapshots.push(tree.clone()),
        }
        let values: Vec<_> = tree.inorder().collect();
        if !values.windows(2).all(|w| w[0] < w[1]) {
            return false;
        }
    }

    snapshots.iter().all(|copy| {
        let values: Vec<_> = copy.inorder().collect();
        values.windows(2).all(|w| w[0] < w[1]) && values.len() == copy.num_nodes()
    })
}
