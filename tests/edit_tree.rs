use edit_tree::{Code, EditTree, Error, NodeInfo};

fn check(tree: &EditTree, expected: &str) {
    assert_eq!(tree.to_string(), expected);
    assert_eq!(tree.len(), expected.chars().count());
    assert_eq!(tree.slow_size(), tree.len());
    assert!(tree.rank_invariant_holds(), "ranks: {}", tree.rank_string());
    assert!(tree.balance_invariant_holds(), "balance: {}", tree.debug_string());
    assert_eq!(tree.height(), tree.slow_height());
}

#[test]
fn empty_tree() {
    let tree = EditTree::new();
    check(&tree, "");
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.rank_string(), "[]");
    assert_eq!(tree.debug_string(), "[]");
    assert!(tree.root().is_none());
}

#[test]
fn single_character_tree() {
    let tree = EditTree::from('q');
    check(&tree, "q");
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.debug_string(), "[q0=]");
    assert_eq!(tree.debug_dump(), vec![NodeInfo { data: 'q', rank: 0, balance: Code::Same, height: 0 }]);
}

#[test]
fn build_from_string() {
    let tree = EditTree::from("abc");
    check(&tree, "abc");
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.rotation_count(), 0);
    assert_eq!(tree.rank_string(), "[b1, a0, c0]");

    let tree = EditTree::from(String::from("abcdefghij"));
    check(&tree, "abcdefghij");
    assert_eq!(tree.debug_string(), "[e4=, b1\\, a0=, c0\\, d0=, h2=, f0\\, g0=, i0\\, j0=]");
}

#[test]
fn insert_into_built_tree() {
    let mut tree = EditTree::from("abc");
    tree.insert(1, 'x').unwrap();
    check(&tree, "axbc");
    assert_eq!(tree.rotation_count(), 0);
    assert_eq!(tree.debug_string(), "[b2/, a0\\, x0=, c0=]");

    tree.insert(2, 'y').unwrap();
    check(&tree, "axybc");
    assert_eq!(tree.rotation_count(), 1);
    assert_eq!(tree.debug_string(), "[b3/, x1=, a0=, y0=, c0=]");
}

#[test]
fn delete_from_front() {
    let mut tree = EditTree::from("abc");
    tree.insert(1, 'x').unwrap();

    assert_eq!(tree.delete(0), Ok('a'));
    check(&tree, "xbc");
    assert_eq!(tree.debug_string(), "[b1=, x0=, c0=]");
}

#[test]
fn delete_node_with_two_children() {
    let mut tree = EditTree::from("abcdefg");
    assert_eq!(tree.delete(3), Ok('d'));
    check(&tree, "abcefg");
    assert_eq!(tree.rank_string(), "[e3, b1, a0, c0, f0, g0]");
}

#[test]
fn delete_everything() {
    let mut tree = EditTree::from("hello, world");
    let mut expected: Vec<char> = "hello, world".chars().collect();

    while !tree.is_empty() {
        let pos = expected.len() / 2;
        assert_eq!(tree.delete(pos), Ok(expected.remove(pos)));
        check(&tree, &expected.iter().collect::<String>());
    }

    assert_eq!(tree.height(), -1);
}

#[test]
fn get_each_position() {
    let text = "the quick brown fox jumps over the lazy dog";
    let tree = EditTree::from(text);
    for (pos, ch) in text.chars().enumerate() {
        assert_eq!(tree.get(pos), Ok(ch));
    }
}

#[test]
fn get_range() {
    let mut tree = EditTree::from("abc");
    tree.insert(1, 'x').unwrap();

    assert_eq!(tree.get_range(1, 2).unwrap(), "xb");
    assert_eq!(tree.get_range(0, 4).unwrap(), "axbc");
    assert_eq!(tree.get_range(3, 1).unwrap(), "c");
    assert_eq!(tree.get_range(2, 0).unwrap(), "");
}

#[test]
fn out_of_range_errors() {
    let mut tree = EditTree::from("abc");
    let before = tree.debug_string();

    assert_eq!(tree.insert(4, 'z'), Err(Error::OutOfRange { pos: 4, len: 0, size: 3 }));
    assert_eq!(tree.delete(3), Err(Error::OutOfRange { pos: 3, len: 1, size: 3 }));
    assert_eq!(tree.get(3), Err(Error::OutOfRange { pos: 3, len: 1, size: 3 }));
    assert_eq!(tree.get_range(2, 2), Err(Error::OutOfRange { pos: 2, len: 2, size: 3 }));
    assert_eq!(tree.get_range(3, 0), Err(Error::OutOfRange { pos: 3, len: 0, size: 3 }));
    assert!(tree.get_range(1, usize::MAX).is_err());

    assert_eq!(tree.debug_string(), before);
    assert_eq!(tree.rotation_count(), 0);

    let mut empty = EditTree::new();
    assert!(empty.get(0).is_err());
    assert!(empty.delete(0).is_err());
    assert!(empty.get_range(0, 0).is_err());
    assert_eq!(empty.insert(0, 'a'), Ok(()));
}

#[test]
fn error_message() {
    let error = EditTree::new().get(7).unwrap_err();
    assert_eq!(error.to_string(), "position 7 (length 1) out of range for tree of size 0");
}

#[test]
fn append_many() {
    let mut tree = EditTree::new();
    let text: String = (0..100).map(|i| (b'a' + (i % 26) as u8) as char).collect();

    for (pos, ch) in text.chars().enumerate() {
        tree.insert(pos, ch).unwrap();
        assert!(tree.rank_invariant_holds());
        assert!(tree.balance_invariant_holds());
    }

    check(&tree, &text);
    // ceil(1.44 * log2(102))
    assert!(tree.height() <= 10);
    assert!(tree.rotation_count() > 0);
}

#[test]
fn push_matches_insert_at_end() {
    let mut pushed = EditTree::new();
    let mut inserted = EditTree::new();

    for ch in "abcdefghijklmnop".chars() {
        pushed.push(ch);
        let end = inserted.len();
        inserted.insert(end, ch).unwrap();
    }

    assert_eq!(pushed.debug_string(), inserted.debug_string());
    assert_eq!(pushed.rotation_count(), inserted.rotation_count());
}

#[test]
fn rotation_count_accumulates() {
    let mut tree = EditTree::new();
    tree.push('a');
    tree.push('c');
    tree.insert(1, 'b').unwrap();
    assert_eq!(tree.rotation_count(), 2);
    assert_eq!(tree.rank_string(), "[b1, a0, c0]");

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.rotation_count(), 2);
}

#[test]
fn clone_is_deep() {
    let mut original = EditTree::new();
    for ch in "abcdefg".chars() { original.push(ch); }

    let mut copy = original.clone();
    assert_eq!(copy.debug_string(), original.debug_string());
    assert_eq!(copy, original);
    assert_eq!(copy.rotation_count(), 0);

    copy.delete(0).unwrap();
    copy.insert(0, 'z').unwrap();
    check(&original, "abcdefg");
    check(&copy, "zbcdefg");
    assert_ne!(copy, original);
}

#[test]
fn root_exposes_shape() {
    let tree = EditTree::from("abc");
    let root = tree.root().unwrap();

    assert_eq!(root.data(), 'b');
    assert_eq!(root.rank(), 1);
    assert_eq!(root.balance(), Code::Same);
    assert_eq!(root.height(), 1);
    assert_eq!(root.left().map(|node| node.data()), Some('a'));
    assert_eq!(root.right().map(|node| node.data()), Some('c'));
}

#[test]
fn iterate_and_collect() {
    let tree: EditTree = "rope".chars().collect();
    assert_eq!(tree.chars().len(), 4);
    assert_eq!((&tree).into_iter().collect::<String>(), "rope");
    assert_eq!(format!("{:?}", tree), tree.debug_string());
    assert_eq!(EditTree::default(), EditTree::new());
}
