//! Reserved words.

use std::fmt;

/// Every reserved word of the language.
///
/// The set is fixed: an identifier spelled like one of these always lexes as
/// a keyword, whether or not the grammar gives it a meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    Let,
    Const,
    Fn,
    Return,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    True,
    False,
    Null,
    Import,
    Export,
    As,
    From,
    Class,
    Extends,
    New,
    This,
    Super,
    Try,
    Catch,
    Finally,
    Throw,
}

impl Keyword {
    /// All keywords in declaration order.
    pub const ALL: [Keyword; 26] = [
        Keyword::Let,
        Keyword::Const,
        Keyword::Fn,
        Keyword::Return,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::For,
        Keyword::Break,
        Keyword::Continue,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::Import,
        Keyword::Export,
        Keyword::As,
        Keyword::From,
        Keyword::Class,
        Keyword::Extends,
        Keyword::New,
        Keyword::This,
        Keyword::Super,
        Keyword::Try,
        Keyword::Catch,
        Keyword::Finally,
        Keyword::Throw,
    ];

    /// Look up the keyword spelled `ident`, if any.
    pub fn from_ident(ident: &str) -> Option<Keyword> {
        let keyword = match ident {
            "let" => Keyword::Let,
            "const" => Keyword::Const,
            "fn" => Keyword::Fn,
            "return" => Keyword::Return,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "for" => Keyword::For,
            "break" => Keyword::Break,
            "continue" => Keyword::Continue,
            "true" => Keyword::True,
            "false" => Keyword::False,
            "null" => Keyword::Null,
            "import" => Keyword::Import,
            "export" => Keyword::Export,
            "as" => Keyword::As,
            "from" => Keyword::From,
            "class" => Keyword::Class,
            "extends" => Keyword::Extends,
            "new" => Keyword::New,
            "this" => Keyword::This,
            "super" => Keyword::Super,
            "try" => Keyword::Try,
            "catch" => Keyword::Catch,
            "finally" => Keyword::Finally,
            "throw" => Keyword::Throw,
            _ => return None,
        };
        Some(keyword)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Const => "const",
            Keyword::Fn => "fn",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Import => "import",
            Keyword::Export => "export",
            Keyword::As => "as",
            Keyword::From => "from",
            Keyword::Class => "class",
            Keyword::Extends => "extends",
            Keyword::New => "new",
            Keyword::This => "this",
            Keyword::Super => "super",
            Keyword::Try => "try",
            Keyword::Catch => "catch",
            Keyword::Finally => "finally",
            Keyword::Throw => "throw",
        }
    }

    /// Reserved for future use: the grammar has no production for it.
    pub const fn is_unsupported(self) -> bool {
        matches!(
            self,
            Keyword::Import
                | Keyword::Export
                | Keyword::As
                | Keyword::From
                | Keyword::Class
                | Keyword::Extends
                | Keyword::New
                | Keyword::This
                | Keyword::Super
                | Keyword::Try
                | Keyword::Catch
                | Keyword::Finally
                | Keyword::Throw
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
