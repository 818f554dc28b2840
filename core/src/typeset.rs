#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Block,
}

impl MathMode {
    pub const ALL: [MathMode; 2] = [MathMode::Inline, MathMode::Block];

    pub fn class_name(self) -> &'static str {
        match self {
            MathMode::Inline => "math-inline",
            MathMode::Block => "math-block",
        }
    }

    pub fn display_mode(self) -> bool {
        matches!(self, MathMode::Block)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypesetReport {
    pub rendered: usize,
    pub failed: usize,
}

/// Renders every item, handing each failure to `on_error` and moving on.
pub fn typeset_each<T, E, R, H>(
    items: impl IntoIterator<Item = T>,
    mut render: R,
    mut on_error: H,
) -> TypesetReport
where
    R: FnMut(&T) -> Result<(), E>,
    H: FnMut(&T, E),
{
    let mut report = TypesetReport::default();
    for item in items {
        match render(&item) {
            Ok(()) => report.rendered += 1,
            Err(err) => {
                report.failed += 1;
                on_error(&item, err);
            }
        }
    }
    report
}
