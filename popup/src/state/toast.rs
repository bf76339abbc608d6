//! Transient notice shown at the bottom of the popup.
//!
//! DESIGN
//! ======
//! Every `show` bumps `seq`; the auto-dismiss timer remembers the sequence it
//! was started for and only hides the toast if nothing newer replaced it.

use inspector::Notice;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl ToastState {
    /// Show `notice`, replacing any visible one. Returns the sequence number
    /// to pass to [`ToastState::dismiss`].
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Hide the toast if it is still the one shown as `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    pub fn css_class(&self) -> String {
        self.current
            .as_ref()
            .map_or_else(|| "toast".to_owned(), Notice::css_class)
    }

    pub fn message(&self) -> String {
        self.current
            .as_ref()
            .map(|notice| notice.message.clone())
            .unwrap_or_default()
    }
}
