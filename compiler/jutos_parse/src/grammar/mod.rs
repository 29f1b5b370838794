//! Grammar productions, split by syntactic category.

mod expr;
mod stmt;

use jutos_ir::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `item (, item)* ,? close`, the opening delimiter already
    /// consumed. A trailing comma is allowed.
    fn comma_list<T>(
        &mut self,
        close: &TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(item(self)?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(close)?;
        Ok(items)
    }
}
