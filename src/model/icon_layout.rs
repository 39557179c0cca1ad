/// At most this many fragments stand for icons in a group row.
pub const MAX_ICONS: usize = 4;

const OVERFLOW_SLOT: usize = 3;
const BREAK_SLOT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    Full,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconFragment {
    Icon { icon: String, size: IconSize },
    /// "+N" badge standing in for the icons that did not fit.
    Overflow(usize),
    Break,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IconLayout {
    pub fragments: Vec<IconFragment>,
    pub empty: bool,
}

impl IconLayout {
    pub fn icon_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| matches!(f, IconFragment::Icon { .. }))
            .count()
    }

    pub fn overflow(&self) -> Option<usize> {
        self.fragments.iter().find_map(|f| match f {
            IconFragment::Overflow(n) => Some(*n),
            _ => None,
        })
    }

    pub fn has_break(&self) -> bool {
        self.fragments.contains(&IconFragment::Break)
    }
}

/// Lays out member icons: two per line, small once there is more than one,
/// and the fourth slot turned into a "+N" badge when more than four exist.
///
/// The badge counts every icon past the first three, so six icons render as
/// three icons and "+3".
pub fn layout_icons<S: AsRef<str>>(icons: &[S]) -> IconLayout {
    let len = icons.len();
    let size = if len > 1 {
        IconSize::Small
    } else {
        IconSize::Full
    };

    let mut fragments: Vec<IconFragment> = icons
        .iter()
        .take(MAX_ICONS)
        .map(|icon| IconFragment::Icon {
            icon: icon.as_ref().to_string(),
            size,
        })
        .collect();

    if len > MAX_ICONS {
        fragments[OVERFLOW_SLOT] = IconFragment::Overflow(len - OVERFLOW_SLOT);
    }
    if len > BREAK_SLOT {
        fragments.insert(BREAK_SLOT, IconFragment::Break);
    }

    IconLayout {
        fragments,
        empty: len == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("mdi:speaker-{i}")).collect()
    }

    fn icon(i: usize, size: IconSize) -> IconFragment {
        IconFragment::Icon {
            icon: format!("mdi:speaker-{i}"),
            size,
        }
    }

    #[test]
    fn no_icons_is_empty() {
        let layout = layout_icons::<String>(&[]);
        assert!(layout.empty);
        assert!(layout.fragments.is_empty());
    }

    #[test]
    fn single_icon_is_full_size() {
        let layout = layout_icons(&icons(1));
        assert!(!layout.empty);
        assert_eq!(layout.fragments, vec![icon(0, IconSize::Full)]);
    }

    #[test]
    fn two_icons_share_one_line() {
        let layout = layout_icons(&icons(2));
        assert_eq!(
            layout.fragments,
            vec![icon(0, IconSize::Small), icon(1, IconSize::Small)]
        );
        assert!(!layout.has_break());
    }

    #[test]
    fn three_icons_wrap_after_second() {
        let layout = layout_icons(&icons(3));
        assert_eq!(
            layout.fragments,
            vec![
                icon(0, IconSize::Small),
                icon(1, IconSize::Small),
                IconFragment::Break,
                icon(2, IconSize::Small),
            ]
        );
    }

    #[test]
    fn four_icons_render_without_badge() {
        let layout = layout_icons(&icons(4));
        assert_eq!(layout.icon_count(), 4);
        assert_eq!(layout.overflow(), None);
        assert_eq!(layout.fragments[2], IconFragment::Break);
        assert_eq!(layout.fragments[4], icon(3, IconSize::Small));
    }

    #[test]
    fn six_icons_show_three_and_badge() {
        let layout = layout_icons(&icons(6));
        assert_eq!(
            layout.fragments,
            vec![
                icon(0, IconSize::Small),
                icon(1, IconSize::Small),
                IconFragment::Break,
                icon(2, IconSize::Small),
                IconFragment::Overflow(3),
            ]
        );
    }

    #[test]
    fn five_icons_badge_counts_from_third() {
        let layout = layout_icons(&icons(5));
        assert_eq!(layout.icon_count(), 3);
        assert_eq!(layout.overflow(), Some(2));
    }

    #[test]
    fn visible_fragment_counts() {
        for len in 0..12 {
            let layout = layout_icons(&icons(len));
            let visible = layout
                .fragments
                .iter()
                .filter(|f| !matches!(f, IconFragment::Break))
                .count();

            let expected = if len > MAX_ICONS { 4 } else { len };
            assert_eq!(visible, expected, "len {len}");
            assert_eq!(layout.has_break(), len > 2, "len {len}");
            assert_eq!(layout.empty, len == 0, "len {len}");

            let all_small = layout.fragments.iter().all(|f| match f {
                IconFragment::Icon { size, .. } => *size == IconSize::Small,
                _ => true,
            });
            assert_eq!(all_small, len != 1, "len {len}");
        }
    }
}
