#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    TogglePanel,
    ShowPanel,
    HidePanel,
    DrillInto(String),
    PopTo(usize),
    PopLevel,
    ActivateSelected,
    SelectBy(isize),
    SelectFirst,
    SelectLast,
    PageBy(isize),
    ScrollBy(isize),
    ResizePanel(i32),
    Noop,
}
