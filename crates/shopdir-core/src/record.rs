//! The flat record extracted from one shop detail page.

/// Literal placeholder written for any field that could not be extracted.
pub const PLACEHOLDER: &str = "N/A";

/// Export column order. Matches the field order of [`ShopRecord`] and is the
/// header row of every page workbook.
pub const COLUMNS: [&str; 7] = [
    "name",
    "address",
    "phone",
    "website",
    "whatsapp",
    "city",
    "responsible",
];

/// One shop's extracted fields.
///
/// Every field is always present; extraction substitutes [`PLACEHOLDER`] when
/// a field cannot be found. No field is validated for format (the phone is
/// whatever the `tel:` link carried, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRecord {
    /// Display name of the shop.
    pub name: String,

    /// Street address as shown on the page.
    pub address: String,

    /// Phone number from the page's `tel:` link, prefix stripped.
    pub phone: String,

    /// External website URL.
    pub website: String,

    /// WhatsApp contact URI (`https://wa.me/...` or `whatsapp://...`).
    pub whatsapp: String,

    /// City / location label.
    pub city: String,

    /// Responsible person named on the page.
    pub responsible: String,
}

impl ShopRecord {
    /// A record with every field set to [`PLACEHOLDER`].
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER.to_owned(),
            address: PLACEHOLDER.to_owned(),
            phone: PLACEHOLDER.to_owned(),
            website: PLACEHOLDER.to_owned(),
            whatsapp: PLACEHOLDER.to_owned(),
            city: PLACEHOLDER.to_owned(),
            responsible: PLACEHOLDER.to_owned(),
        }
    }

    /// Field values in [`COLUMNS`] order, for tabular export.
    #[must_use]
    pub fn fields(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.phone.as_str(),
            self.website.as_str(),
            self.whatsapp.as_str(),
            self.city.as_str(),
            self.responsible.as_str(),
        ]
    }
}
