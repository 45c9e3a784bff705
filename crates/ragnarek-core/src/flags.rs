//! Widget option flags.
//!
//! Bit positions follow Dear ImGui so a `uint32_t` coming over the C
//! boundary can be converted with `from_bits_truncate` without a lookup
//! table. Bits this engine does not act on are still declared so they
//! survive the round trip.

bitflags::bitflags! {
    /// Options for [`Ui::begin`](crate::Ui::begin) and the window part of
    /// [`Ui::begin_child`](crate::Ui::begin_child).
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR  = 1 << 0;
        const NO_RESIZE     = 1 << 1;
        const NO_MOVE       = 1 << 2;
        const NO_SCROLLBAR  = 1 << 3;
        const NO_COLLAPSE   = 1 << 5;
        const NO_BACKGROUND = 1 << 7;
        const NO_DECORATION = Self::NO_TITLE_BAR.bits() | Self::NO_RESIZE.bits()
                            | Self::NO_SCROLLBAR.bits() | Self::NO_COLLAPSE.bits();
    }
}

bitflags::bitflags! {
    /// Options for [`Ui::begin_child`](crate::Ui::begin_child).
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChildFlags: u32 {
        const BORDER                    = 1 << 0;
        const ALWAYS_USE_WINDOW_PADDING = 1 << 1;
        const RESIZE_X                  = 1 << 2;
        const RESIZE_Y                  = 1 << 3;
        const AUTO_RESIZE_X             = 1 << 4;
        const AUTO_RESIZE_Y             = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Options for the colour edit / picker / button family.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ColorEditFlags: u32 {
        const NO_ALPHA           = 1 << 1;
        const NO_PICKER          = 1 << 2;
        const NO_OPTIONS         = 1 << 3;
        const NO_SMALL_PREVIEW   = 1 << 4;
        const NO_INPUTS          = 1 << 5;
        const NO_TOOLTIP         = 1 << 6;
        const NO_LABEL           = 1 << 7;
        const NO_SIDE_PREVIEW    = 1 << 8;
        const NO_DRAG_DROP       = 1 << 9;
        const NO_BORDER          = 1 << 10;
        const ALPHA_BAR          = 1 << 16;
        const ALPHA_PREVIEW      = 1 << 17;
        const ALPHA_PREVIEW_HALF = 1 << 18;
        const HDR                = 1 << 19;
        const DISPLAY_RGB        = 1 << 20;
        const DISPLAY_HSV        = 1 << 21;
        const DISPLAY_HEX        = 1 << 22;
        const UINT8              = 1 << 23;
        const FLOAT              = 1 << 24;
        const PICKER_HUE_BAR     = 1 << 25;
        const PICKER_HUE_WHEEL   = 1 << 26;
        const INPUT_RGB          = 1 << 27;
        const INPUT_HSV          = 1 << 28;
    }
}

bitflags::bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderFlags: u32 {
        const ALWAYS_CLAMP       = 1 << 4;
        const LOGARITHMIC        = 1 << 5;
        const NO_ROUND_TO_FORMAT = 1 << 6;
        const NO_INPUT           = 1 << 7;
    }
}

bitflags::bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SelectableFlags: u32 {
        const DONT_CLOSE_POPUPS  = 1 << 0;
        const SPAN_ALL_COLUMNS   = 1 << 1;
        const ALLOW_DOUBLE_CLICK = 1 << 2;
        const DISABLED           = 1 << 3;
        const ALLOW_OVERLAP      = 1 << 4;
    }
}

bitflags::bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ComboFlags: u32 {
        const POPUP_ALIGN_LEFT = 1 << 0;
        const HEIGHT_SMALL     = 1 << 1;
        const HEIGHT_REGULAR   = 1 << 2;
        const HEIGHT_LARGE     = 1 << 3;
        const HEIGHT_LARGEST   = 1 << 4;
        const NO_ARROW_BUTTON  = 1 << 5;
        const NO_PREVIEW       = 1 << 6;
    }
}

impl ComboFlags {
    /// Popup height cap, in items, implied by the `HEIGHT_*` bits.
    pub fn max_visible_items(self) -> Option<usize> {
        if self.contains(Self::HEIGHT_SMALL)        { Some(4)  }
        else if self.contains(Self::HEIGHT_REGULAR) { Some(8)  }
        else if self.contains(Self::HEIGHT_LARGE)   { Some(20) }
        else if self.contains(Self::HEIGHT_LARGEST) { None     }
        else                                        { Some(8)  }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_flags_match_imgui_bits() {
        let picker = ColorEditFlags::NO_SIDE_PREVIEW
            | ColorEditFlags::ALPHA_BAR
            | ColorEditFlags::NO_INPUTS
            | ColorEditFlags::ALPHA_PREVIEW
            | ColorEditFlags::DISPLAY_HEX;
        assert_eq!(picker.bits(), (1 << 8) | (1 << 16) | (1 << 5) | (1 << 17) | (1 << 22));
    }

    #[test]
    fn unknown_bits_are_dropped_from_raw_values() {
        let f = SelectableFlags::from_bits_truncate(0xFFFF_0001);
        assert_eq!(f, SelectableFlags::DONT_CLOSE_POPUPS);
    }

    #[test]
    fn combo_height_hints() {
        assert_eq!(ComboFlags::empty().max_visible_items(), Some(8));
        assert_eq!(ComboFlags::HEIGHT_SMALL.max_visible_items(), Some(4));
        assert_eq!(ComboFlags::HEIGHT_LARGEST.max_visible_items(), None);
    }
}
