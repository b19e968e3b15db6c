//! Immutable singly linked list with a pure fold
//!
//! Lists share their tails: prepending never copies or mutates the list it
//! extends, so many lists can grow from one common suffix.

use std::{fmt, rc::Rc};

struct Link<T> {
    first: T,
    rest: List<T>,
}

pub struct List<T> {
    head: Option<Rc<Link<T>>>,
}

impl<T> List<T> {
    pub fn empty() -> List<T> {
        List { head: None }
    }

    pub fn cons(first: T, rest: List<T>) -> List<T> {
        List {
            head: Some(Rc::new(Link { first, rest })),
        }
    }

    /// A new list with `first` in front of this one; `self` is untouched.
    pub fn push_front(&self, first: T) -> List<T> {
        List::cons(first, self.clone())
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|link| &link.first)
    }

    pub fn rest(&self) -> Option<&List<T>> {
        self.head.as_ref().map(|link| &link.rest)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Left fold over every element, front to back.
    pub fn fold<R, F>(&self, init: R, mut func: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(init, |acc, elem| func(acc, elem))
    }

    /// Whether some element and any element after it satisfy `compare`,
    /// with the earlier element passed first.
    pub fn any_pair_matches<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut current = self;
        while let Some(link) = &current.head {
            let found = link
                .rest
                .fold(false, |found, other| found || compare(&link.first, other));
            if found {
                return true;
            }
            current = &link.rest;
        }
        false
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

// Long lists would otherwise be dropped recursively, one frame per link.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(link) = head {
            match Rc::try_unwrap(link) {
                Ok(mut link) => head = link.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Keeps the iteration order: the first item becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items = iter.into_iter().collect::<Vec<_>>();
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |rest, first| List::cons(first, rest))
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.rest.head.as_deref();
            &link.first
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
