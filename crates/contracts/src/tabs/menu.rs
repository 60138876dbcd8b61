const RETETAR_MENU: [&str; 7] = [
    "Afiseaza alimente",
    "Adauga aliment nou",
    "Editeaza aliment",
    "Sterge aliment",
    "Adauga ingredient",
    "Editeaza ingredient",
    "Sterge ingredient",
];

const CZA_MENU: [&str; 4] = [
    "Seteaza coordonate",
    "Adauga aliment in CZA",
    "Afiseaza CZA curent",
    "Genereaza lista alimente",
];

/// Secondary menu shown inside a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryMenu {
    pub title: String,
    pub entries: Vec<String>,
}

impl SecondaryMenu {
    fn from_entries(title: &str, entries: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Returns the menu for a tab label, if that tab has one.
    pub fn for_label(label: &str) -> Option<Self> {
        match label {
            "retetar" => Some(Self::from_entries("Retetar", &RETETAR_MENU)),
            "cza" => Some(Self::from_entries("CZA", &CZA_MENU)),
            _ => None,
        }
    }

    /// Maps a raw `selectedIndex` value to an entry. `-1` and anything past the end give `None`.
    pub fn entry(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }
}
