use crate::Fragment;

/// Last-in-first-out stack of the fragments built so far.
#[derive(Debug, Default)]
pub struct ConstructionStack {
    fragments: Vec<Fragment>,
}

impl ConstructionStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn pop(&mut self) -> Option<Fragment> {
        self.fragments.pop()
    }

    pub fn peek(&self) -> Option<&Fragment> {
        self.fragments.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Fragment> {
        self.fragments.last_mut()
    }

    /// The fragment directly below the top, if any.
    pub fn peek_second(&self) -> Option<&Fragment> {
        self.fragments.iter().rev().nth(1)
    }

    /// Pops the two topmost fragments as `(lower, upper)`.
    ///
    /// Leaves the stack untouched if it holds fewer than two fragments.
    pub fn pop_pair(&mut self) -> Option<(Fragment, Fragment)> {
        if self.fragments.len() < 2 {
            return None;
        }
        let upper = self.fragments.pop()?;
        let lower = self.fragments.pop()?;
        Some((lower, upper))
    }

    pub fn depth(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Consumes the stack, returning its only fragment.
    /// Returns the depth instead when the stack does not hold exactly one fragment.
    pub fn into_single(mut self) -> Result<Fragment, usize> {
        match self.fragments.len() {
            1 => self.fragments.pop().ok_or(0),
            depth => Err(depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FragmentBuilder, Symbol};

    fn lit(s: &str) -> Fragment {
        FragmentBuilder::literal(&Symbol::from(s))
    }

    #[test]
    fn lifo() {
        let mut stack = ConstructionStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);

        stack.push(lit("a"));
        stack.push(lit("b"));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.peek(), Some(&lit("b")));
        assert_eq!(stack.peek_second(), Some(&lit("a")));

        assert_eq!(stack.pop(), Some(lit("b")));
        assert_eq!(stack.peek_second(), None);
    }

    #[test]
    fn pop_pair_needs_two() {
        let mut stack = ConstructionStack::new();
        stack.push(lit("a"));
        assert_eq!(stack.pop_pair(), None);
        assert_eq!(stack.depth(), 1);

        stack.push(lit("b"));
        assert_eq!(stack.pop_pair(), Some((lit("a"), lit("b"))));
        assert!(stack.is_empty());
    }

    #[test]
    fn into_single() {
        let mut stack = ConstructionStack::new();
        stack.push(lit("a"));
        assert_eq!(stack.into_single(), Ok(lit("a")));

        assert_eq!(ConstructionStack::new().into_single(), Err(0));

        let mut stack = ConstructionStack::new();
        stack.push(lit("a"));
        stack.push(lit("b"));
        assert_eq!(stack.into_single(), Err(2));
    }
}
