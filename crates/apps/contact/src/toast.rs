/// Confirmation toast visibility. Each send bumps `serial` so a hide timer armed by an
/// earlier send cannot dismiss a newer toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentToast {
    serial: u64,
    visible: bool,
}

impl SentToast {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows the toast and returns the serial its hide timer must present.
    pub fn show(&mut self) -> u64 {
        self.serial += 1;
        self.visible = true;
        self.serial
    }

    /// Hides the toast unless a later send has replaced it.
    pub fn expire(&mut self, serial: u64) -> bool {
        if self.serial != serial || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Hides the toast immediately, invalidating any pending hide timer.
    pub fn dismiss(&mut self) {
        self.serial += 1;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hide_timer_from_its_own_send_clears_the_toast() {
        let mut toast = SentToast::default();
        let serial = toast.show();
        assert!(toast.visible());
        assert!(toast.expire(serial));
        assert!(!toast.visible());
    }

    #[test]
    fn earlier_hide_timer_leaves_a_newer_toast_up() {
        let mut toast = SentToast::default();
        let first = toast.show();
        toast.dismiss();
        let second = toast.show();

        assert!(!toast.expire(first));
        assert!(toast.visible());
        assert!(toast.expire(second));
        assert!(!toast.visible());
    }

    #[test]
    fn dismiss_invalidates_the_pending_timer() {
        let mut toast = SentToast::default();
        let serial = toast.show();
        toast.dismiss();
        let before = toast;
        assert!(!toast.expire(serial));
        assert_eq!(toast, before);
    }
}
