use std::fmt::{Display, Formatter};

/// The operators understood in a postfix expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `.`: concatenates the two topmost fragments.
    Concat,
    /// `+`: one or more repetitions of the topmost fragment.
    Plus,
    /// `*`: zero or more repetitions of the topmost fragment.
    Star,
}

impl Operator {
    /// The token this operator is written as.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Concat => ".",
            Operator::Plus => "+",
            Operator::Star => "*",
        }
    }

    fn from_token(text: &str) -> Option<Self> {
        match text {
            "." => Some(Operator::Concat),
            "+" => Some(Operator::Plus),
            "*" => Some(Operator::Star),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A single token of a postfix expression.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    text: String,
}

impl Symbol {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the operator this symbol denotes, if any.
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_token(&self.text)
    }

    pub fn is_operator(&self) -> bool {
        self.operator().is_some()
    }

    /// Returns true if the symbol is made up of lowercase letters only, or is an integer.
    ///
    /// Note that this is not the complement of [`is_operator`](Symbol::is_operator):
    /// an uppercase letter is neither a terminal nor an operator.
    /// Construction only looks at `is_operator`, and treats everything else as a literal.
    pub fn is_terminal(&self) -> bool {
        self.text.chars().all(char::is_lowercase) || self.text.parse::<i32>().is_ok()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
