use fixsrc_binder::SymbolId;
use fixsrc_common::Range;

/// One constructor parameter of a test class with no fixture source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub class: SymbolId,
    pub class_name: String,
    /// Index of the checked constructor in declaration order.
    pub constructor: usize,
    /// Index of the parameter within that constructor.
    pub parameter_index: usize,
    pub parameter_name: String,
    /// The declared parameter type as written: `Fixture<int>`.
    pub parameter_type: String,
    pub range: Range,
}

impl Finding {
    /// Declaration order of class, then parameter.
    pub fn sort_key(&self) -> (SymbolId, usize, usize) {
        (self.class, self.constructor, self.parameter_index)
    }
}
