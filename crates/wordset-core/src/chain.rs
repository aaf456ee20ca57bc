// Singly linked chain of the entries that share one bucket

use std::iter::FusedIterator;

type Link = Option<Box<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// One bucket's chain. The set owns every node exclusively; there are no
/// shared or back links.
#[derive(Default)]
pub(crate) struct Chain {
    head: Link,
}

impl Chain {
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link a new node in front of the current head.
    pub(crate) fn push_front(&mut self, value: String) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Unlink the head node and return its value.
    pub(crate) fn pop_front(&mut self) -> Option<String> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }

    pub(crate) fn front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    pub(crate) fn contains(&self, item: &str) -> bool {
        self.iter().any(|value| value == item)
    }

    /// Unlink the first node (counting from the head) whose value equals
    /// `item`. Later duplicates stay in place.
    pub(crate) fn remove_first(&mut self, item: &str) -> bool {
        let Some(position) = self.iter().position(|value| value == item) else {
            return false;
        };

        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => return false,
            }
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                true
            }
            None => false,
        }
    }

    /// Drop every node without recursing through the `next` links.
    pub(crate) fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    pub(crate) fn iter(&self) -> BucketIter<'_> {
        BucketIter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Iterator over the values of one bucket, head first.
#[derive(Clone)]
pub struct BucketIter<'a> {
    next: Option<&'a Node>,
}

impl BucketIter<'_> {
    pub(crate) fn empty() -> Self {
        Self { next: None }
    }
}

impl<'a> Iterator for BucketIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}

impl FusedIterator for BucketIter<'_> {}
