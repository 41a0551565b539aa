use ::quickcheck::{Arbitrary, Gen};
use crate::EditTree;

impl Arbitrary for EditTree {
    fn arbitrary(gen: &mut Gen) -> Self { String::arbitrary(gen).chars().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.to_string().shrink().map(EditTree::from))
    }
}
