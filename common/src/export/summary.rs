//! カテゴリ別カタログ
//!
//! Divi → カテゴリ の対応を反転し、カテゴリごとのDivi一覧を出力する。

use super::Table;
use crate::catalog::Catalog;
use crate::types::Item;
use std::collections::BTreeMap;

/// カテゴリのないPartner Diviをまとめる区分
pub const PARTNER_BUCKET: &str = "Partner Divi's";

/// Partner Divi の名前に付ける接尾辞
const PARTNER_SUFFIX: &str = " (Partner)";

/// カテゴリ → Divi一覧（カテゴリ順、各一覧は名前順）
pub fn category_index(catalog: &Catalog) -> BTreeMap<String, Vec<&Item>> {
    let mut index: BTreeMap<String, Vec<&Item>> = BTreeMap::new();

    for item in catalog.items() {
        if item.has_categories() {
            for label in item.categories.iter() {
                index.entry(label.to_string()).or_default().push(item);
            }
        } else if item.partner {
            index.entry(PARTNER_BUCKET.to_string()).or_default().push(item);
        }
    }

    // catalog.items() が名前順なので各一覧も名前順
    index
}

/// 一覧表示用の名前
pub fn listed_name(item: &Item) -> String {
    if item.partner {
        format!("{}{}", item.name, PARTNER_SUFFIX)
    } else {
        item.name.clone()
    }
}

/// カテゴリ別カタログを生成
pub fn summary_table(catalog: &Catalog) -> Table {
    let rows = category_index(catalog)
        .into_iter()
        .map(|(category, items)| {
            let names: Vec<String> = items.iter().map(|item| listed_name(item)).collect();
            vec![category, items.len().to_string(), names.join(", ")]
        })
        .collect();

    Table {
        header: vec![
            "Categorie".into(),
            "Aantal Divi's".into(),
            "Divi Namen".into(),
        ],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, categories: &[&str], partner: bool) -> Item {
        let mut item = Item::new(name);
        item.categories.extend(categories.iter().copied());
        item.partner = partner;
        item
    }

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            item("Zwangerschap", &["Gynaecologie en Verloskunde"], false),
            item("Bevalling", &["Gynaecologie en Verloskunde", "Neonatologie"], true),
            item("Externe uitleg", &[], true),
            item("Zonder alles", &[], false),
        ])
    }

    #[test]
    fn test_inverted_rows() {
        let table = summary_table(&catalog());

        assert_eq!(table.header, vec!["Categorie", "Aantal Divi's", "Divi Namen"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["Gynaecologie en Verloskunde", "2", "Bevalling (Partner), Zwangerschap"],
                vec!["Neonatologie", "1", "Bevalling (Partner)"],
                vec!["Partner Divi's", "1", "Externe uitleg (Partner)"],
            ]
        );
    }

    #[test]
    fn test_items_without_categories_or_partner_omitted() {
        let catalog = catalog();
        let index = category_index(&catalog);
        assert!(index
            .values()
            .all(|items| items.iter().all(|i| i.name != "Zonder alles")));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(summary_table(&catalog()), summary_table(&catalog()));
    }
}
