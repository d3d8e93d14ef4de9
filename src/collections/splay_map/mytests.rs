use crate::collections::splay_map::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const REP: usize = if cfg!(miri) { 2 } else { 100 };
const N: usize = if cfg!(miri) { 100 } else { 100000 };

fn root_key<K: Copy, V>(map: &SplayMap<K, V>) -> K {
    map.arena[map.root.unwrap() as usize].key
}

fn root_value<K, V: Copy>(map: &SplayMap<K, V>) -> V {
    map.arena[map.root.unwrap() as usize].value
}

#[test]
fn lab_scenario_test() {
    // Insertion order and values from the original driver.
    let entries = [
        (9, "G"),
        (10, "D"),
        (4, "P"),
        (3, "A"),
        (6, "X"),
        (5, "B"),
        (7, "C"),
    ];
    let mut map = SplayMap::new();
    for (i, (k, v)) in entries.iter().enumerate() {
        map.insert(*k, *v);
        // The just-inserted entry must be the root.
        assert_eq!(root_key(&map), *k);
        assert_eq!(root_value(&map), *v);
        assert_eq!(map.len(), i + 1);
        map.check();
    }
    assert_eq!(map.len(), 7);
    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![3, 4, 5, 6, 7, 9, 10]);
}

#[test]
fn get_hit_splays_to_root_test() {
    let mut map = SplayMap::new();
    for i in 0..100 {
        map.insert(i, i * 2);
    }
    for k in [0, 73, 99, 50, 50, 1] {
        assert_eq!(map.get(&k), Some(&(k * 2)));
        assert_eq!(root_key(&map), k);
        map.check();
    }
}

#[test]
fn get_miss_splays_last_visited_test() {
    let mut map = SplayMap::new();
    for k in [10, 20, 30] {
        map.insert(k, ());
    }
    // Ascending insertion leaves 30 at the root with 20, then 10, on the
    // left spine; the search for 25 dies at 20's absent right child.
    assert_eq!(map.get(&25), None);
    assert_eq!(root_key(&map), 20);
    assert_eq!(map.len(), 3);
    map.check();
}

#[test]
fn get_miss_single_node_test() {
    let mut map = SplayMap::new();
    map.insert(5, "x");
    assert_eq!(map.get(&7), None);
    assert_eq!(map.get(&3), None);
    assert_eq!(root_key(&map), 5);
    assert_eq!(map.len(), 1);
    map.check();
}

#[test]
fn get_empty_test() {
    let mut map = SplayMap::<i32, i32>::new();
    assert_eq!(map.get(&1), None);
    assert!(map.is_empty());
    map.check();
}

#[test]
fn duplicate_keys_test() {
    let mut map = SplayMap::new();
    map.insert(5, "A");
    assert_eq!(root_value(&map), "A");
    map.insert(5, "B");
    // The most recently inserted duplicate is the root.
    assert_eq!(root_key(&map), 5);
    assert_eq!(root_value(&map), "B");
    assert_eq!(map.len(), 2);
    map.check();
    // Which duplicate a lookup returns is unspecified.
    let got = *map.get(&5).unwrap();
    assert!(got == "A" || got == "B");
    assert_eq!(root_key(&map), 5);
    let values: Vec<&str> = map.values().copied().collect();
    assert_eq!(values.len(), 2);
    assert!(values.contains(&"A") && values.contains(&"B"));
}

#[test]
fn duplicate_pairs_test() {
    // Even identical (key, value) pairs are separate entries.
    let mut map = SplayMap::new();
    for _ in 0..10 {
        map.insert(1, 1);
    }
    assert_eq!(map.len(), 10);
    map.check();
}

#[test]
fn exp_clear_test() {
    let n = N;
    let mut map = SplayMap::new();
    for i in 0..n {
        map.insert(i as u32, 1u8);
    }
    map.clear();
    assert!(map.len() == 0);
    assert!(map.is_empty());
    assert_eq!(map.get(&0), None);
    map.check();
    map.insert(1, 1);
    assert_eq!(map.len(), 1);
}

#[test]
fn exp_insert_fwd() {
    for _rep in 0..REP {
        let mut map = SplayMap::<usize, usize>::default();
        let n = N;
        for i in 0..n {
            map.insert(i, i);
        }
        assert!(map.len() == n);
        if _rep == 0 {
            print_memory();
        }
    }
}

#[test]
fn std_insert_fwd() {
    for _rep in 0..REP {
        let mut map = std::collections::BTreeMap::<usize, usize>::default();
        let n = N;
        for i in 0..n {
            map.insert(i, i);
        }
        if _rep == 0 {
            print_memory();
        }
    }
}

#[test]
fn exp_insert_rev() {
    for _rep in 0..REP {
        let mut map = SplayMap::<usize, usize>::default();
        let n = N;
        for i in (0..n).rev() {
            map.insert(i, i);
        }
        assert!(map.len() == n);
        if _rep == 0 {
            print_memory();
        }
    }
}

#[test]
fn std_insert_rev() {
    for _rep in 0..REP {
        let mut map = std::collections::BTreeMap::<usize, usize>::default();
        let n = N;
        for i in (0..n).rev() {
            map.insert(i, i);
        }
        if _rep == 0 {
            print_memory();
        }
    }
}

#[test]
fn exp_get_test() {
    let mut m = SplayMap::new();
    let n = N;
    for i in 0..n {
        m.insert(i, i);
    }
    assert!(m.len() == n);
    print_memory();
    for _rep in 0..REP {
        for i in 0..n {
            assert!(m.get(&i).unwrap() == &i);
        }
    }
}

#[test]
fn std_get_test() {
    let mut m = std::collections::BTreeMap::new();
    let n = N;
    for i in 0..n {
        m.insert(i, i);
    }
    assert!(m.len() == n);
    print_memory();
    for _rep in 0..REP {
        for i in 0..n {
            assert!(m.get(&i).unwrap() == &i);
        }
    }
}

#[test]
fn exp_iter_nm() {
    let mut map = SplayMap::<usize, usize>::default();
    let n = N;
    for i in 0..n {
        map.insert(i, i);
    }
    for _rep in 0..REP {
        for (k, v) in &map {
            assert!(k == v);
        }
    }
}

#[test]
fn std_iter_nm() {
    let mut map = std::collections::BTreeMap::<usize, usize>::default();
    let n = N;
    for i in 0..n {
        map.insert(i, i);
    }
    for _rep in 0..REP {
        for (k, v) in &map {
            assert!(k == v);
        }
    }
}

#[test]
fn exp_iter_mut() {
    let mut map = SplayMap::<usize, usize>::default();
    let n = if cfg!(miri) { 100 } else { 10000 };
    for i in 0..n {
        map.insert(i, i);
    }
    for (k, v) in &mut map {
        *v += *k;
    }
    for (k, v) in &map {
        assert!(*v == k * 2);
    }
    map.check();
}

#[test]
fn exp_into_iter() {
    let mut map = SplayMap::<usize, usize>::default();
    let n = if cfg!(miri) { 100 } else { 10000 };
    for i in (0..n).rev() {
        map.insert(i, i);
    }
    let mut expect = 0;
    for (k, v) in map {
        assert!(k == expect && v == expect);
        expect += 1;
    }
    assert_eq!(expect, n);
}

#[test]
fn iter_rev_test() {
    let mut map = SplayMap::new();
    let mut keys: Vec<u32> = (0..500).collect();
    let mut rng = StdRng::seed_from_u64(7);
    keys.shuffle(&mut rng);
    for k in keys {
        map.insert(k, k);
    }
    let fwd: Vec<u32> = map.keys().copied().collect();
    let mut rev: Vec<u32> = map.keys().rev().copied().collect();
    rev.reverse();
    assert_eq!(fwd, rev);
    assert_eq!(fwd, (0..500).collect::<Vec<u32>>());
    assert_eq!(map.iter().len(), 500);
    // Meeting in the middle yields each entry exactly once.
    let mut it = map.iter();
    let mut seen = Vec::new();
    loop {
        match it.next() {
            Some((k, _)) => seen.push(*k),
            None => break,
        }
        if let Some((k, _)) = it.next_back() {
            seen.push(*k);
        } else {
            break;
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..500).collect::<Vec<u32>>());
}

#[test]
fn values_mut_test() {
    let mut map = SplayMap::new();
    for i in 0..50 {
        map.insert(i, i);
    }
    for v in map.values_mut() {
        *v *= 10;
    }
    for (k, v) in &map {
        assert_eq!(*v, k * 10);
    }
}

#[test]
fn first_last_test() {
    let mut map = SplayMap::new();
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.last_key_value(), None);
    for k in [5, 1, 9, 3] {
        map.insert(k, k * 100);
    }
    assert_eq!(map.first_key_value(), Some((&1, &100)));
    assert_eq!(map.last_key_value(), Some((&9, &900)));
    // Read-only accessors must not restructure the tree.
    assert_eq!(root_key(&map), 3);
}

#[test]
fn accessors_test() {
    let mut map = SplayMap::new();
    map.insert(2, String::from("two"));
    map.insert(4, String::from("four"));
    assert!(map.contains_key(&2));
    assert!(!map.contains_key(&3));
    assert_eq!(map.get_key_value(&4), Some((&4, &String::from("four"))));
    if let Some(v) = map.get_mut(&2) {
        v.push_str(" !");
    }
    assert_eq!(map.get(&2).map(String::as_str), Some("two !"));
    assert_eq!(root_key(&map), 2);
    map.check();
}

#[test]
fn tree_string_test() {
    let mut map = SplayMap::<i32, char>::new();
    assert_eq!(map.tree_string(), "");
    map.insert(2, 'b');
    map.insert(1, 'a');
    map.insert(3, 'c');
    // Root 3, left child 2, left-left child 1 after the zig-zig.
    assert_eq!(map.tree_string(), "\n3c\n    2b\n        1a");
    let triples: Vec<(usize, i32, char)> =
        map.tree_iter().map(|(d, k, v)| (d, *k, *v)).collect();
    assert_eq!(triples, vec![(0, 3, 'c'), (1, 2, 'b'), (2, 1, 'a')]);
}

#[test]
fn tree_iter_shape_test() {
    let mut map = SplayMap::new();
    for k in [10, 20, 30] {
        map.insert(k, ());
    }
    // Left spine: each node one deeper than the last.
    let depths: Vec<usize> = map.tree_iter().map(|(d, _, _)| d).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    let keys: Vec<i32> = map.tree_iter().map(|(_, k, _)| *k).collect();
    assert_eq!(keys, vec![30, 20, 10]);
}

#[test]
#[should_panic(expected = "rotate_left: node is not a right child")]
fn rotate_left_precondition_test() {
    let mut map = SplayMap::new();
    map.insert(1, ());
    map.insert(2, ());
    // Node 0 holds key 1 and is the left child of the root.
    map.rotate_left(0);
}

#[test]
#[should_panic(expected = "rotate_right: node has no parent")]
fn rotate_root_precondition_test() {
    let mut map = SplayMap::new();
    map.insert(1, ());
    map.insert(2, ());
    // Node 1 holds key 2 and is the root.
    map.rotate_right(1);
}

#[test]
fn random_model_test() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let n = if cfg!(miri) { 50 } else { 2000 };
    for _rep in 0..REP.min(10) {
        let mut map = SplayMap::new();
        let mut model: Vec<(u8, u32)> = Vec::new();
        for i in 0..n {
            let k: u8 = rng.gen_range(0..32);
            map.insert(k, i as u32);
            model.push((k, i as u32));
            assert_eq!(map.len(), model.len());
            if i % 64 == 0 {
                map.check();
            }
        }
        map.check();
        // Same multiset of entries, keys in non-decreasing order.
        let mut got: Vec<(u8, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert!(got.windows(2).all(|w| w[0].0 <= w[1].0));
        got.sort_unstable();
        model.sort_unstable();
        assert_eq!(got, model);
        // Lookups agree with the model; hits finish at the root.
        for k in 0u8..40 {
            let expected: Vec<u32> = model
                .iter()
                .filter(|(mk, _)| *mk == k)
                .map(|(_, mv)| *mv)
                .collect();
            match map.get(&k) {
                Some(v) => {
                    assert!(expected.contains(v));
                    assert_eq!(root_key(&map), k);
                }
                None => assert!(expected.is_empty()),
            }
            map.check();
        }
        assert_eq!(map.len(), n);
    }
}

#[test]
fn repeated_access_keeps_root_test() {
    let mut map = SplayMap::new();
    for i in 0..1000 {
        map.insert(i, i);
    }
    map.get(&314);
    for _ in 0..10 {
        assert_eq!(map.get(&314), Some(&314));
        assert_eq!(root_key(&map), 314);
    }
}

#[test]
fn eq_hash_test() {
    use std::collections::hash_map::DefaultHasher;
    let mut a = SplayMap::new();
    let mut b = SplayMap::new();
    for k in [3, 1, 2] {
        a.insert(k, k);
    }
    for k in [2, 3, 1] {
        b.insert(k, k);
    }
    // Shapes differ, contents compare equal.
    assert_eq!(a, b);
    let hash = |m: &SplayMap<i32, i32>| {
        let mut h = DefaultHasher::new();
        m.hash(&mut h);
        h.finish()
    };
    assert_eq!(hash(&a), hash(&b));
    b.insert(4, 4);
    assert_ne!(a, b);
    assert!(a < b);
}

#[test]
fn from_extend_test() {
    let map = SplayMap::from([(1, 2), (3, 4)]);
    assert_eq!(map.len(), 2);
    let a = [1, 2, 3];
    let mut map: SplayMap<i32, i32> = a.iter().map(|&x| (x, x * x)).collect();
    assert_eq!(map.get(&3), Some(&9));
    map.extend([(5, 25), (5, 26)]);
    assert_eq!(map.len(), 5);
    map.check();
    let cloned = map.clone();
    assert_eq!(cloned, map);
    assert_eq!(format!("{map:?}"), format!("{cloned:?}"));
}

#[test]
fn debug_test() {
    let mut map = SplayMap::new();
    map.insert(2, "b");
    map.insert(1, "a");
    assert_eq!(format!("{map:?}"), "{1: \"a\", 2: \"b\"}");
}

#[test]
#[cfg(feature = "serde")]
fn exp_serde_test() {
    let n = N;
    let mut map = SplayMap::new();
    for i in 0..n {
        map.insert(i as u32, 1u8);
    }
    for _i in 0..REP {
        let ser = bincode::serialize(&map).unwrap();
        let _: SplayMap<u32, u8> = bincode::deserialize(&ser).unwrap();
    }
}

#[test]
#[cfg(feature = "serde")]
fn serde_duplicates_test() {
    let mut map = SplayMap::new();
    map.insert(5, String::from("A"));
    map.insert(5, String::from("B"));
    map.insert(3, String::from("z"));
    let ser = bincode::serialize(&map).unwrap();
    let de: SplayMap<i32, String> = bincode::deserialize(&ser).unwrap();
    assert_eq!(de.len(), 3);
    let mut got: Vec<(i32, String)> = de.iter().map(|(k, v)| (*k, v.clone())).collect();
    let mut want: Vec<(i32, String)> = map.iter().map(|(k, v)| (*k, v.clone())).collect();
    got.sort();
    want.sort();
    assert_eq!(got, want);
    de.check();
}

#[test]
fn exp_mem_test() {
    let n = N * 10;
    let mut map = SplayMap::new();
    for i in 0..n {
        map.insert(i as u32, 1u8);
    }
    println!("Done insertions");
    print_memory();
}

#[test]
fn std_mem_test() {
    let n = N * 10;
    let mut map = std::collections::BTreeMap::new();
    for i in 0..n {
        map.insert(i as u32, 1u8);
    }
    print_memory();
}

#[test]
/// Not really a test, just prints the size of various types.
fn sizes() {
    type K = u64;
    type V = u64;
    println!("size of Node={}", std::mem::size_of::<nodes::Node<K, V>>());
    println!("size of SplayMap={}", std::mem::size_of::<SplayMap<K, V>>());
}
