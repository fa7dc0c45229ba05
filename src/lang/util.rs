use crate::lang::*;
use core::fmt::{Debug, Formatter, Result as FmtResult};

/// Structure used in debug printing. Prints elements separated by some separator.
pub(crate) struct Sep<'a, T: Debug + 'a, I: IntoIterator<Item = &'a T> + Clone> {
    pub iter: I,
    pub sep: &'static str,
}

/// A set represented by a sorted vector without duplicates.
/// Two sets are equal (and hash and order the same) iff they have the same elements.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VecSet<T: Ord> {
    elements: Vec<T>,
}

/////////////////////////

impl<T: Ord> Default for VecSet<T> {
    fn default() -> Self {
        Self { elements: vec![] }
    }
}
impl<T: Ord> IntoIterator for VecSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
impl<'a, T: Ord> IntoIterator for &'a VecSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
impl<T: Ord> VecSet<T> {
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        elements.sort();
        elements.dedup();
        Self { elements }
    }
    /// Returns true iff `t` was not already present.
    pub fn insert(&mut self, t: T) -> bool {
        match self.elements.binary_search(&t) {
            Ok(_) => false,
            Err(idx) => {
                self.elements.insert(idx, t);
                true
            }
        }
    }
    pub fn contains(&self, t: &T) -> bool {
        self.elements.binary_search(t).is_ok()
    }
    pub fn contains_all<'a>(&self, ts: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        ts.into_iter().all(|t| self.contains(t))
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
impl<T: Ord> FromIterator<T> for VecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
impl<T: Ord> Extend<T> for VecSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl<'a, T: Debug + 'a, I: IntoIterator<Item = &'a T> + Clone> Debug for Sep<'a, T, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, x) in self.iter.clone().into_iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.sep)?;
            }
            write!(f, "{:?}", x)?;
        }
        Ok(())
    }
}

impl<T: Ord + Debug> Debug for VecSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{{:?}}}", Sep { iter: &self.elements, sep: ", " })
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", &self.0)
    }
}

impl Debug for Head {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bottom => write!(f, "false"),
            Self::Disjunction(atoms) => Sep { iter: atoms, sep: " | " }.fmt(f),
        }
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let keyword = match self.mode {
            Mode::Imperative => "must",
            Mode::Permissive => "may",
        };
        write!(f, "{} ", keyword)?;
        if !self.body.is_empty() {
            write!(f, "{:?} ", Sep { iter: &self.body, sep: ", " })?;
        }
        write!(f, "=> {:?}.", self.head)
    }
}

impl Debug for ClauseHead {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bottom => write!(f, "false"),
            Self::Atom(atom) => atom.fmt(f),
        }
    }
}

impl Debug for DefiniteClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.head.fmt(f)?;
        if !self.body.is_empty() {
            write!(f, " :- {:?}", Sep { iter: &self.body, sep: ", " })?;
        }
        write!(f, ".")
    }
}

impl Debug for DefiniteProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{{:?}}}", Sep { iter: &self.clauses, sep: " " })
    }
}
