use std::ops::{
    Bound::{Excluded, Included, Unbounded},
    Range, RangeBounds,
};

#[derive(Clone)]
pub struct AssignRmq<T> {
    base: Vec<Option<T>>,
    tree: Vec<Option<T>>,
    pending: Vec<Option<T>>,
    len: usize,
}

fn conquer<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    a.into_iter().chain(b).min()
}

fn to_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Included(&s) => s,
        Excluded(&s) => s + 1,
        Unbounded => 0,
    };
    let end = match range.end_bound() {
        Included(&e) => e + 1,
        Excluded(&e) => e,
        Unbounded => len,
    };
    if start > end {
        panic!("slice index starts at {start} but ends at {end}");
    }
    if end > len {
        panic!("range end index {end} out of range for slice of length {len}");
    }
    start..end
}

impl<T: Ord + Clone> AssignRmq<T> {
    pub fn new(len: usize) -> Self {
        Self {
            base: vec![None; len],
            tree: vec![None; 4 * len],
            pending: vec![None; 4 * len],
            len,
        }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn min(&mut self, range: impl RangeBounds<usize>) -> Option<T> {
        let Range { start, end } = to_range(range, self.len);
        if start == end {
            return None;
        }
        self.min_in(1, 0, self.len - 1, start, end - 1)
    }

    pub fn assign(&mut self, range: impl RangeBounds<usize>, value: T) {
        let Range { start, end } = to_range(range, self.len);
        if start == end {
            return;
        }
        self.assign_in(1, 0, self.len - 1, start, end - 1, &value);
    }

    pub fn get(&mut self, i: usize) -> Option<T> { self.min(i..=i) }

    fn build(&mut self, p: usize, l: usize, r: usize) {
        if l == r {
            self.tree[p] = self.base[l].clone();
        } else {
            let m = (l + r) / 2;
            self.build(2 * p, l, m);
            self.build(2 * p + 1, m + 1, r);
            self.tree[p] =
                conquer(self.tree[2 * p].clone(), self.tree[2 * p + 1].clone());
        }
    }

    fn propagate(&mut self, p: usize, l: usize, r: usize) {
        if let Some(v) = self.pending[p].take() {
            if l == r {
                self.base[l] = Some(v.clone());
            } else {
                // Assignment supersedes whatever the children held.
                self.pending[2 * p] = Some(v.clone());
                self.pending[2 * p + 1] = Some(v.clone());
            }
            self.tree[p] = Some(v);
        }
    }

    fn min_in(
        &mut self,
        p: usize,
        l: usize,
        r: usize,
        i: usize,
        j: usize,
    ) -> Option<T> {
        self.propagate(p, l, r);
        if i > j {
            return None;
        }
        if i <= l && r <= j {
            return self.tree[p].clone();
        }
        let m = (l + r) / 2;
        conquer(
            self.min_in(2 * p, l, m, i, j.min(m)),
            self.min_in(2 * p + 1, m + 1, r, i.max(m + 1), j),
        )
    }

    fn assign_in(
        &mut self,
        p: usize,
        l: usize,
        r: usize,
        i: usize,
        j: usize,
        value: &T,
    ) {
        self.propagate(p, l, r);
        if i > j {
            return;
        }
        if i <= l && r <= j {
            self.pending[p] = Some(value.clone());
            self.propagate(p, l, r);
            return;
        }
        let m = (l + r) / 2;
        self.assign_in(2 * p, l, m, i, j.min(m), value);
        self.assign_in(2 * p + 1, m + 1, r, i.max(m + 1), j, value);
        let left = self.resolved(2 * p);
        let right = self.resolved(2 * p + 1);
        self.tree[p] = conquer(left, right);
    }

    // The value the node will hold once propagated. Peeks only; forcing
    // propagation here would discard the siblings' bookkeeping.
    fn resolved(&self, p: usize) -> Option<T> {
        self.pending[p].clone().or_else(|| self.tree[p].clone())
    }

    fn flush(&mut self, p: usize, l: usize, r: usize) {
        self.propagate(p, l, r);
        if l < r {
            let m = (l + r) / 2;
            self.flush(2 * p, l, m);
            self.flush(2 * p + 1, m + 1, r);
        }
    }
}

impl<T: Ord + Clone> From<Vec<T>> for AssignRmq<T> {
    fn from(a: Vec<T>) -> Self {
        let mut res = Self::new(a.len());
        res.base = a.into_iter().map(Some).collect();
        if res.len > 0 {
            res.build(1, 0, res.len - 1);
        }
        res
    }
}

impl<T: Ord + Clone> FromIterator<T> for AssignRmq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buf: Vec<_> = iter.into_iter().collect();
        buf.into()
    }
}

impl<T: Ord + Clone> From<AssignRmq<T>> for Vec<Option<T>> {
    fn from(mut self_: AssignRmq<T>) -> Self {
        if self_.len > 0 {
            self_.flush(1, 0, self_.len - 1);
        }
        self_.base
    }
}
