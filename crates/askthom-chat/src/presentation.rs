//! Widget sizing state: expansion mode plus the minimized flag.

/// Widget sizing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    #[default]
    Normal,
    Half,
    Full,
}

impl ExpansionMode {
    /// Next mode in the Normal -> Half -> Full -> Normal cycle
    pub fn next(self) -> Self {
        match self {
            ExpansionMode::Normal => ExpansionMode::Half,
            ExpansionMode::Half => ExpansionMode::Full,
            ExpansionMode::Full => ExpansionMode::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionMode::Normal => "normal",
            ExpansionMode::Half => "half",
            ExpansionMode::Full => "full",
        }
    }
}

/// Outer container sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSize {
    /// Minimized header bar
    Collapsed,
    Compact,
    HalfScreen,
    FullScreen,
}

impl ContainerSize {
    pub fn class(&self) -> &'static str {
        match self {
            ContainerSize::Collapsed => "w-72",
            ContainerSize::Compact => "w-[380px] max-h-[50vh]",
            ContainerSize::HalfScreen => "fixed right-4 bottom-4 w-[420px] h-[50vh] max-h-[500px]",
            ContainerSize::FullScreen => "fixed inset-4 w-auto h-auto max-h-[calc(100vh-32px)]",
        }
    }
}

/// Message list sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageArea {
    Compact,
    HalfScreen,
    FullScreen,
}

impl MessageArea {
    pub fn class(&self) -> &'static str {
        match self {
            MessageArea::Compact => "max-h-[250px] overflow-y-auto",
            MessageArea::HalfScreen => "max-h-[calc(50vh-180px)] overflow-y-auto",
            MessageArea::FullScreen => "max-h-[calc(100vh-250px)] overflow-y-auto",
        }
    }

    /// How many trailing messages a text host shows; `None` means all
    pub fn visible_messages(&self) -> Option<usize> {
        match self {
            MessageArea::Compact => Some(4),
            MessageArea::HalfScreen => Some(10),
            MessageArea::FullScreen => None,
        }
    }
}

/// Everything a host needs to size the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub container: ContainerSize,
    pub message_area: MessageArea,
    /// Dim the page behind the widget; clicking it returns to normal
    pub backdrop: bool,
    pub messages_visible: bool,
}

/// Presentation state machine.
///
/// `minimized` is only reachable and only effective in [`ExpansionMode::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presentation {
    expansion: ExpansionMode,
    minimized: bool,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> ExpansionMode {
        self.expansion
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn cycle_expansion(&mut self) -> ExpansionMode {
        self.expansion = self.expansion.next();
        self.expansion
    }

    /// Leave half/full screen in one step
    pub fn click_backdrop(&mut self) {
        if self.has_backdrop() {
            self.expansion = ExpansionMode::Normal;
        }
    }

    pub fn has_backdrop(&self) -> bool {
        self.expansion != ExpansionMode::Normal
    }

    /// Whether the minimize control is offered at all
    pub fn can_minimize(&self) -> bool {
        self.expansion == ExpansionMode::Normal
    }

    /// Flip the minimized flag. Returns false, changing nothing, outside normal mode.
    pub fn toggle_minimized(&mut self) -> bool {
        if !self.can_minimize() {
            return false;
        }
        self.minimized = !self.minimized;
        true
    }

    /// Label for the expansion control, describing what the next cycle step does
    pub fn cycle_hint(&self) -> &'static str {
        match self.expansion {
            ExpansionMode::Normal => "Expand to half screen",
            ExpansionMode::Half => "Expand to full screen",
            ExpansionMode::Full => "Minimize",
        }
    }

    pub fn layout(&self) -> Layout {
        let collapsed = self.minimized && self.expansion == ExpansionMode::Normal;
        let (container, message_area) = match self.expansion {
            ExpansionMode::Full => (ContainerSize::FullScreen, MessageArea::FullScreen),
            ExpansionMode::Half => (ContainerSize::HalfScreen, MessageArea::HalfScreen),
            ExpansionMode::Normal if collapsed => (ContainerSize::Collapsed, MessageArea::Compact),
            ExpansionMode::Normal => (ContainerSize::Compact, MessageArea::Compact),
        };

        Layout {
            container,
            message_area,
            backdrop: self.has_backdrop(),
            messages_visible: !collapsed,
        }
    }
}
