use std::collections::BTreeMap;

use bintree::{BstMap, Dictionary};

use crate::Op;

#[quickcheck]
fn behaves_like_btreemap(ops: Vec<Op<i8>>) -> bool {
    let mut map = BstMap::new();
    let mut model = BTreeMap::new();

    for (i, op) in ops.into_iter().enumerate() {
        let agrees = match op {
            Op::Add(k) => {
                let absent = !model.contains_key(&k);
                if absent {
                    model.insert(k, i);
                }
                map.add(k, i) == absent
            }
            Op::Remove(k) => map.remove(&k) == model.remove(&k).is_some(),
            Op::Snapshot => map.len() == model.len(),
        };
        if !agrees {
            return false;
        }
    }

    map.iter().eq(model.iter()) && model.iter().all(|(k, v)| map.get(k) == Some(v))
}
