//! Divi別の詳細一覧

use super::Table;
use crate::catalog::Catalog;
use crate::legacy::PARTNER_MARKER;

/// 詳細一覧を生成（名前順）
pub fn detail_table(catalog: &Catalog) -> Table {
    let rows = catalog
        .items()
        .map(|item| {
            let categories = if !item.has_categories() && item.partner {
                PARTNER_MARKER.to_string()
            } else {
                item.categories.join(", ")
            };
            let partner = if item.partner { "Ja" } else { "Nee" };
            vec![item.name.clone(), categories, partner.to_string()]
        })
        .collect();

    Table {
        header: vec![
            "Divi Naam".into(),
            "Categorieën".into(),
            "Is Partner Divi".into(),
        ],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    #[test]
    fn test_detail_rows() {
        let mut hart = Item::new("Hart");
        hart.categories.extend(["Cardiologie", "Chirurgie"]);
        let mut partner = Item::new("Partnerfilm");
        partner.partner = true;
        let catalog = Catalog::from_items(vec![partner, hart, Item::new("Leeg")]);

        let table = detail_table(&catalog);
        assert_eq!(table.header, vec!["Divi Naam", "Categorieën", "Is Partner Divi"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["Hart", "Cardiologie, Chirurgie", "Nee"],
                vec!["Leeg", "", "Nee"],
                vec!["Partnerfilm", "Partner Divi", "Ja"],
            ]
        );
    }
}
