use super::{Link, Node};

/// An iterator over the characters of an `EditTree`, in order.
///
/// See [`EditTree::chars`](struct.EditTree.html#method.chars) for an example.
#[derive(Clone)]
pub struct Chars<'a> {
    // nodes whose character and right subtree are still to be visited, innermost last
    path: Vec<&'a Node>,
    size: usize,
}

impl<'a> Chars<'a> {
    pub fn new(root: &'a Link, size: usize) -> Chars<'a> {
        let mut it = Chars { path: vec![], size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: &'a Link) {
        while let Some(ref node) = *link {
            self.path.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let node = self.path.pop()?;
        self.descend(&node.right);
        self.size -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a> ExactSizeIterator for Chars<'a> {}
