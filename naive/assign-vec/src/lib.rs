use std::ops::{Bound, RangeBounds};

pub struct AssignVec<T>(Vec<Option<T>>);

impl<T: Ord + Clone> AssignVec<T> {
    pub fn new(len: usize) -> Self { Self(vec![None; len]) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn assign(&mut self, range: impl RangeBounds<usize>, value: T) {
        for slot in &mut self.0[bounds(&range)] {
            *slot = Some(value.clone());
        }
    }
    pub fn min(&self, range: impl RangeBounds<usize>) -> Option<T> {
        self.0[bounds(&range)].iter().flatten().min().cloned()
    }
    pub fn get(&self, i: usize) -> Option<T> { self.0[i].clone() }
}

fn bounds(range: &impl RangeBounds<usize>) -> (Bound<usize>, Bound<usize>) {
    (range.start_bound().cloned(), range.end_bound().cloned())
}

impl<T> From<Vec<T>> for AssignVec<T> {
    fn from(a: Vec<T>) -> Self { Self(a.into_iter().map(Some).collect()) }
}

impl<T> From<AssignVec<T>> for Vec<Option<T>> {
    fn from(a: AssignVec<T>) -> Self { a.0 }
}

#[test]
fn sanity_check() {
    let mut a: AssignVec<i32> = vec![4, 2, 6].into();
    assert_eq!(a.min(..), Some(2));
    a.assign(0..2, 7);
    assert_eq!(a.min(..), Some(6));
    assert_eq!(a.min(0..2), Some(7));

    let mut b = AssignVec::<i32>::new(3);
    assert_eq!(b.min(..), None);
    b.assign(1..=1, 5);
    assert_eq!(b.min(..), Some(5));
    assert_eq!(b.min(2..3), None);
}
