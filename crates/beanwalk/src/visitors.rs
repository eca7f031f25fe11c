//! Ready-made visitors

use crate::error::Result;
use crate::path::PropertyPath;
use crate::property::BoundProperty;
use crate::value::BeanRef;
use crate::walker::{BeanVisitor, Walk};
use std::io::Write;

/// Writes one `'path' = 'value'` line per visited property
pub struct PrintVisitor<W: Write> {
    writer: W,
}

/// Printing visitor over `writer`
pub fn print_to<W: Write>(writer: W) -> PrintVisitor<W> {
    PrintVisitor { writer }
}

impl<W: Write> PrintVisitor<W> {
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BeanVisitor for PrintVisitor<W> {
    fn visit(
        &mut self,
        property: &BoundProperty,
        _current: &BeanRef,
        path: &PropertyPath,
        _stack: &[BeanRef],
    ) -> Result<Walk> {
        writeln!(self.writer, "'{}' = '{}'", path, property.read()?)?;
        Ok(Walk::Continue)
    }
}
