//! Keyword-to-category table for English and Vietnamese messages.
//!
//! The table is ordered and the first matching keyword wins, so entry
//! order is behavior, not formatting.

use walletchat_core::Category;

pub(crate) const KEYWORD_TABLE: &[(&str, Category)] = &[
    // Food
    ("breakfast", Category::Food),
    ("lunch", Category::Food),
    ("dinner", Category::Food),
    ("food", Category::Food),
    ("restaurant", Category::Food),
    ("cafe", Category::Food),
    ("coffee", Category::Food),
    ("grocery", Category::Food),
    ("groceries", Category::Food),
    ("supermarket", Category::Food),
    ("ăn sáng", Category::Food),
    ("ăn trưa", Category::Food),
    ("ăn tối", Category::Food),
    ("thức ăn", Category::Food),
    ("nhà hàng", Category::Food),
    ("siêu thị", Category::Food),
    // Transportation
    ("taxi", Category::Transportation),
    ("uber", Category::Transportation),
    ("grab", Category::Transportation),
    ("bus", Category::Transportation),
    ("train", Category::Transportation),
    ("metro", Category::Transportation),
    ("transportation", Category::Transportation),
    ("gas", Category::Transportation),
    ("petrol", Category::Transportation),
    ("parking", Category::Transportation),
    ("xe", Category::Transportation),
    ("xăng", Category::Transportation),
    ("đỗ xe", Category::Transportation),
    // Income
    ("salary", Category::Income),
    ("bonus", Category::Income),
    ("reward", Category::Income),
    ("gift", Category::Income),
    ("refund", Category::Income),
    ("lương", Category::Income),
    ("thưởng", Category::Income),
    ("quà", Category::Income),
    ("hoàn tiền", Category::Income),
    // Shopping
    ("shopping", Category::Shopping),
    ("clothes", Category::Shopping),
    ("shoes", Category::Shopping),
    ("dress", Category::Shopping),
    ("shirt", Category::Shopping),
    ("pants", Category::Shopping),
    ("quần áo", Category::Shopping),
    ("giày", Category::Shopping),
    ("váy", Category::Shopping),
    ("áo", Category::Shopping),
    ("quần", Category::Shopping),
    // Entertainment
    ("movie", Category::Entertainment),
    ("cinema", Category::Entertainment),
    ("theater", Category::Entertainment),
    ("concert", Category::Entertainment),
    ("entertainment", Category::Entertainment),
    ("games", Category::Entertainment),
    ("phim", Category::Entertainment),
    ("rạp", Category::Entertainment),
    ("giải trí", Category::Entertainment),
    // Bills
    ("bill", Category::Bills),
    ("electricity", Category::Bills),
    ("water", Category::Bills),
    ("internet", Category::Bills),
    ("phone", Category::Bills),
    ("rent", Category::Bills),
    ("insurance", Category::Bills),
    ("hóa đơn", Category::Bills),
    ("điện", Category::Bills),
    ("nước", Category::Bills),
    ("thuê nhà", Category::Bills),
    ("bảo hiểm", Category::Bills),
];

/// Scan the normalized text against the keyword table and return the
/// category of the first keyword found as a substring, if any.
pub fn extract_category(text: &str) -> Option<Category> {
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, category)| *category)
}
