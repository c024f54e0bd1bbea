use bintree::{BinaryTree, TreeShape};

use crate::Op;

/// Collects the values of a tree through the visitor interface.
fn visited<F>(tree: &mut BinaryTree<i8>, traverse: F) -> Vec<i8>
where
    F: FnOnce(&mut BinaryTree<i8>, &mut dyn FnMut(&mut i8)),
{
    let mut out = Vec::new();
    traverse(tree, &mut |item: &mut i8| out.push(*item));
    out
}

#[quickcheck]
fn visitors_match_iterators(xs: Vec<i8>) -> bool {
    let mut tree: BinaryTree<_> = xs.into_iter().collect();

    let pre: Vec<_> = tree.preorder().copied().collect();
    let ino: Vec<_> = tree.inorder().copied().collect();
    let post: Vec<_> = tree.postorder().copied().collect();

    pre == visited(&mut tree, |t, v| t.preorder_traverse(v))
        && ino == visited(&mut tree, |t, v| t.inorder_traverse(v))
        && post == visited(&mut tree, |t, v| t.postorder_traverse(v))
}

#[quickcheck]
fn each_node_visited_once(xs: Vec<i8>) -> bool {
    let mut tree: BinaryTree<_> = xs.iter().copied().collect();
    let mut calls = 0;
    tree.postorder_traverse(&mut |_: &mut i8| calls += 1);

    calls == xs.len() && tree.num_nodes() == xs.len()
}

#[quickcheck]
fn remove_absent_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: BinaryTree<_> = xs.into_iter().filter(|x| *x != absent).collect();
    let before: Vec<_> = tree.preorder().copied().collect();
    let height = tree.height();

    !tree.remove(&absent)
        && tree.preorder().copied().eq(before.into_iter())
        && tree.height() == height
}

#[quickcheck]
fn clear_empties(xs: Vec<i8>) -> bool {
    let mut tree: BinaryTree<_> = xs.into_iter().collect();
    tree.clear();

    tree.is_empty() && tree.num_nodes() == 0 && tree.root_data().is_err()
}

#[quickcheck]
fn copies_are_independent(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut snapshots = Vec::new();

    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x);
            }
            Op::Remove(x) => {
                tree.remove(&x);
            }
            Op::Snapshot => {
                let copy = tree.clone();
                let contents: Vec<_> = copy.preorder().copied().collect();
                snapshots.push((copy, contents));
            }
        }
    }

    snapshots.iter().all(|(copy, contents)| {
        copy.preorder().copied().eq(contents.iter().copied())
            && copy.num_nodes() == contents.len()
    })
}
