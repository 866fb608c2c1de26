//! Draft state for the create-team form.

#[cfg(test)]
#[path = "team_form_test.rs"]
mod team_form_test;

/// One editable member row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberRow {
    pub id: String,
    pub name: String,
}

/// Draft for the create-team form. Saving it only logs the draft; the
/// backend is never called from that screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub members: Vec<MemberRow>,
}

impl Default for TeamDraft {
    fn default() -> Self {
        // The form always starts with one blank row.
        Self {
            name: String::new(),
            members: vec![MemberRow::default()],
        }
    }
}

impl TeamDraft {
    pub fn add_row(&mut self) {
        self.members.push(MemberRow::default());
    }

    /// Remove a row. Out-of-range indexes are ignored; the page only offers
    /// removal past the first row.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.members.len() {
            self.members.remove(index);
        }
    }

    pub fn set_member_id(&mut self, index: usize, value: &str) {
        if let Some(row) = self.members.get_mut(index) {
            row.id = value.to_owned();
        }
    }

    pub fn set_member_name(&mut self, index: usize, value: &str) {
        if let Some(row) = self.members.get_mut(index) {
            row.name = value.to_owned();
        }
    }
}
