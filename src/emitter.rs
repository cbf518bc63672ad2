use crate::error::EmitError;
use crate::matcher::Bouquet;
use std::io::Write;

/// Surfaces completed bouquets, in the order they complete.
pub trait Emitter {
    fn emit(&mut self, bouquet: &Bouquet) -> Result<(), EmitError>;
}

/// Collects display codes in memory.
impl Emitter for Vec<String> {
    fn emit(&mut self, bouquet: &Bouquet) -> Result<(), EmitError> {
        self.push(bouquet.display_code.clone());
        Ok(())
    }
}

/// Keeps every bouquet, filler outcome included.
impl Emitter for Vec<Bouquet> {
    fn emit(&mut self, bouquet: &Bouquet) -> Result<(), EmitError> {
        self.push(bouquet.clone());
        Ok(())
    }
}

/// Writes one display code per line and flushes after each, so a reader on
/// the other end of a pipe sees every bouquet as soon as it completes.
pub struct WriterEmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, bouquet: &Bouquet) -> Result<(), EmitError> {
        writeln!(self.writer, "{}", bouquet.display_code)
            .and_then(|_| self.writer.flush())
            .map_err(|e| EmitError::Write {
                code: bouquet.display_code.clone(),
                message: e.to_string(),
            })
    }
}
