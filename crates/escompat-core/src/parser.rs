//! JavaScript parsing on the swc toolchain.
//!
//! Each call builds a throwaway `SourceMap`, so spans come back in that
//! map's address space rather than as plain source offsets. [`ParsedProgram`]
//! keeps the file's base position and normalizes spans on the way out;
//! nothing outside this module handles raw `BytePos` values.

use swc_common::{FileName, SourceMap, Span, Spanned, sync::Lrc};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser as SwcParser, StringInput, Syntax, lexer::Lexer};

use crate::location::SourceRange;

/// A syntax error from the parser, positioned for display and for tooling.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    /// 1-based line of the first reported error.
    pub line: usize,
    /// Zero-based display column.
    pub column: usize,
    /// Offending span as plain offsets into the source text.
    pub range: SourceRange,
    pub message: String,
}

/// A successfully parsed source unit plus the span base needed to read
/// node positions as source offsets.
#[derive(Debug, Clone)]
pub struct ParsedProgram {
    program: Program,
    base: u32,
}

impl ParsedProgram {
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Converts an AST span into offsets into the analyzed source.
    pub fn span_range(&self, span: Span) -> SourceRange {
        SourceRange::new(
            span.lo.0.saturating_sub(self.base) as usize,
            span.hi.0.saturating_sub(self.base) as usize,
        )
    }
}

/// Parses JavaScript source text, accepting both scripts and ES modules.
///
/// Syntax errors are fatal: recovered-but-reported errors fail the parse
/// just like unrecoverable ones, since diagnostics over a partially
/// reconstructed tree would not be trustworthy.
pub fn parse(source: &str) -> Result<ParsedProgram, ParseError> {
    let source_map: Lrc<SourceMap> = Default::default();
    let file = source_map.new_source_file(
        FileName::Custom("input.js".into()).into(),
        source.to_string(),
    );
    let base = file.start_pos.0;

    let lexer = Lexer::new(
        Syntax::Es(EsSyntax::default()),
        Default::default(),
        StringInput::from(&*file),
        None,
    );
    let mut parser = SwcParser::new_from(lexer);

    let result = parser.parse_program();
    let mut recovered = parser.take_errors();

    match result {
        Ok(program) => {
            if recovered.is_empty() {
                Ok(ParsedProgram { program, base })
            } else {
                Err(spanned_error(recovered.remove(0), &source_map, base))
            }
        }
        Err(e) => Err(spanned_error(e, &source_map, base)),
    }
}

fn spanned_error(
    error: swc_ecma_parser::error::Error,
    source_map: &SourceMap,
    base: u32,
) -> ParseError {
    let span = error.span();
    let loc = source_map.lookup_char_pos(span.lo);
    ParseError {
        line: loc.line,
        column: loc.col_display,
        range: SourceRange::new(
            span.lo.0.saturating_sub(base) as usize,
            span.hi.0.saturating_sub(base) as usize,
        ),
        message: error.kind().msg().to_string(),
    }
}
