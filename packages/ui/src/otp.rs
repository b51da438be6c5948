//! Six-box one-time code entry.
//!
//! [`OtpDigits`] holds the box contents and decides where focus goes after
//! each keystroke or paste; [`OtpInput`] renders it.

use std::rc::Rc;

use dioxus::prelude::*;

pub const OTP_LEN: usize = 6;

/// Outcome of feeding one input event into [`OtpDigits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpChange {
    /// The input contained something other than digits; nothing changed.
    Rejected,
    /// Boxes were updated and `focus` should receive focus next.
    Updated { focus: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpDigits {
    boxes: [Option<char>; OTP_LEN],
}

impl OtpDigits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.boxes.get(index).copied().flatten()
    }

    /// Text shown in box `index`.
    pub fn display(&self, index: usize) -> String {
        self.digit(index).map(String::from).unwrap_or_default()
    }

    /// Handle the new raw value of box `index`.
    ///
    /// A single character is a keystroke. Several characters are a paste,
    /// unless they are the old digit plus one new character on either side
    /// of it (typing over a filled box).
    pub fn input(&mut self, index: usize, value: &str) -> OtpChange {
        if index >= OTP_LEN {
            return OtpChange::Rejected;
        }
        let chars: Vec<char> = value.chars().collect();
        match chars.as_slice() {
            [] => {
                self.boxes[index] = None;
                OtpChange::Updated { focus: index }
            }
            [c] => self.type_digit(index, *c),
            [old, c] if self.boxes[index] == Some(*old) => self.type_digit(index, *c),
            [c, old] if self.boxes[index] == Some(*old) => self.type_digit(index, *c),
            _ => self.paste(value),
        }
    }

    fn type_digit(&mut self, index: usize, c: char) -> OtpChange {
        if !c.is_ascii_digit() {
            return OtpChange::Rejected;
        }
        self.boxes[index] = Some(c);
        OtpChange::Updated {
            focus: (index + 1).min(OTP_LEN - 1),
        }
    }

    /// Fill from the first box. Spaces and dashes are ignored, anything
    /// else rejects the whole paste.
    pub fn paste(&mut self, text: &str) -> OtpChange {
        let cleaned: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if cleaned.is_empty() || !cleaned.iter().all(char::is_ascii_digit) {
            return OtpChange::Rejected;
        }
        let filled = cleaned.len().min(OTP_LEN);
        self.boxes = [None; OTP_LEN];
        for (slot, c) in self.boxes.iter_mut().zip(cleaned) {
            *slot = Some(c);
        }
        OtpChange::Updated { focus: filled - 1 }
    }

    /// Backspace pressed in box `index`. Returns the box to focus when the
    /// current one is already empty.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if index > 0 && index < OTP_LEN && self.boxes[index].is_none() {
            Some(index - 1)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(Option::is_some)
    }

    /// The full code, only once every box is filled.
    pub fn code(&self) -> Option<String> {
        self.boxes.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.boxes = [None; OTP_LEN];
    }
}

/// Row of six single-digit inputs bound to `digits`.
#[component]
pub fn OtpInput(
    mut digits: Signal<OtpDigits>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut handles: Signal<Vec<Option<Rc<MountedData>>>> =
        use_signal(|| vec![None; OTP_LEN]);
    // Bumped per box to remount an input whose DOM value must be reset.
    let mut generations = use_signal(|| [0u32; OTP_LEN]);
    let mut pending_focus = use_signal(|| Option::<usize>::None);

    let mut focus = move |index: usize| {
        let handle = handles.read().get(index).cloned().flatten();
        match handle {
            Some(handle) => {
                spawn(async move {
                    if let Err(e) = handle.set_focus(true).await {
                        tracing::warn!("otp focus failed: {e:?}");
                    }
                });
            }
            None => pending_focus.set(Some(index)),
        }
    };

    rsx! {
        div {
            class: "otp-row",
            role: "group",
            aria_label: "One-time code",
            for (index, generation) in generations().into_iter().enumerate() {
                input {
                    key: "{index}-{generation}",
                    class: "otp-box",
                    r#type: "text",
                    inputmode: "numeric",
                    autocomplete: if index == 0 { "one-time-code" } else { "off" },
                    aria_label: format!("Digit {}", index + 1),
                    disabled: disabled,
                    value: digits.read().display(index),
                    onmounted: move |evt: MountedEvent| {
                        handles.write()[index] = Some(evt.data());
                        if pending_focus() == Some(index) {
                            pending_focus.set(None);
                            focus(index);
                        }
                    },
                    oninput: move |evt: FormEvent| {
                        let change = digits.write().input(index, &evt.value());
                        match change {
                            OtpChange::Updated { focus: next } => focus(next),
                            OtpChange::Rejected => {
                                generations.write()[index] += 1;
                                pending_focus.set(Some(index));
                            }
                        }
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Backspace {
                            if let Some(previous) = digits.read().backspace(index) {
                                focus(previous);
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_advances_focus() {
        let mut otp = OtpDigits::new();
        assert_eq!(otp.input(0, "4"), OtpChange::Updated { focus: 1 });
        assert_eq!(otp.input(1, "2"), OtpChange::Updated { focus: 2 });
        assert_eq!(otp.display(0), "4");
        assert_eq!(otp.code(), None);
    }

    #[test]
    fn test_last_box_keeps_focus() {
        let mut otp = OtpDigits::new();
        assert_eq!(otp.input(5, "9"), OtpChange::Updated { focus: 5 });
    }

    #[test]
    fn test_non_digit_rejected() {
        let mut otp = OtpDigits::new();
        otp.input(0, "1");
        assert_eq!(otp.input(1, "a"), OtpChange::Rejected);
        assert_eq!(otp.digit(1), None);
        assert_eq!(otp.input(0, "1x"), OtpChange::Rejected);
        assert_eq!(otp.digit(0), Some('1'));
    }

    #[test]
    fn test_typing_over_filled_box() {
        let mut otp = OtpDigits::new();
        otp.input(2, "3");
        assert_eq!(otp.input(2, "37"), OtpChange::Updated { focus: 3 });
        assert_eq!(otp.digit(2), Some('7'));
    }

    #[test]
    fn test_typing_before_filled_digit_keeps_other_boxes() {
        let mut otp = OtpDigits::new();
        otp.paste("123");
        assert_eq!(otp.input(2, "73"), OtpChange::Updated { focus: 3 });
        assert_eq!(otp.digit(0), Some('1'));
        assert_eq!(otp.digit(1), Some('2'));
        assert_eq!(otp.digit(2), Some('7'));
        assert_eq!(otp.digit(3), None);
    }

    #[test]
    fn test_full_paste_fills_all_and_focuses_last() {
        let mut otp = OtpDigits::new();
        assert_eq!(otp.input(0, "123456"), OtpChange::Updated { focus: 5 });
        assert_eq!(otp.code().as_deref(), Some("123456"));
        assert!(otp.is_complete());
    }

    #[test]
    fn test_paste_into_later_box_starts_from_first() {
        let mut otp = OtpDigits::new();
        assert_eq!(otp.input(3, "987"), OtpChange::Updated { focus: 2 });
        assert_eq!(otp.display(0), "9");
        assert_eq!(otp.display(2), "7");
        assert_eq!(otp.digit(3), None);
    }

    #[test]
    fn test_paste_cleanup_and_truncation() {
        let mut otp = OtpDigits::new();
        assert_eq!(otp.paste("123-456 78"), OtpChange::Updated { focus: 5 });
        assert_eq!(otp.code().as_deref(), Some("123456"));

        let before = otp.clone();
        assert_eq!(otp.paste("12ab56"), OtpChange::Rejected);
        assert_eq!(otp, before);
        assert_eq!(otp.paste(" - "), OtpChange::Rejected);
    }

    #[test]
    fn test_backspace_moves_left_from_empty_box() {
        let mut otp = OtpDigits::new();
        otp.input(0, "1");
        assert_eq!(otp.backspace(1), Some(0));
        assert_eq!(otp.backspace(0), None);

        otp.input(1, "2");
        assert_eq!(otp.backspace(1), None);
        assert_eq!(otp.input(1, ""), OtpChange::Updated { focus: 1 });
        assert_eq!(otp.digit(1), None);
    }

    #[test]
    fn test_clear() {
        let mut otp = OtpDigits::new();
        otp.paste("654321");
        otp.clear();
        assert_eq!(otp, OtpDigits::new());
    }
}
