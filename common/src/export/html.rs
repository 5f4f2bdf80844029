//! 検索可能な静的HTMLカタログ
//!
//! スタイルとスクリプトを埋め込んだ単一ファイルを文字列テンプレートで生成する。
//! サーバー側の処理はなく、検索・カテゴリ絞り込みはブラウザ内で行う。

use super::summary::category_index;
use crate::catalog::Catalog;
use crate::legacy::PARTNER_MARKER;
use crate::types::Item;

/// HTML生成オプション
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Indiveo Divi Catalogus".into(),
            subtitle: "Overzicht van alle beschikbare Divi's voor zorgprofessionals".into(),
            footer: "Indiveo - Begrijpelijke patiëntvoorlichting".into(),
        }
    }
}

/// data-categories 属性の区切り
const CATEGORY_DELIMITER: &str = "|";

const STYLE: &str = r#"        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container { max-width: 1400px; margin: 0 auto; }
        header { text-align: center; color: white; padding: 30px 0; }
        header h1 { font-size: 2.5em; margin-bottom: 10px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }
        header p { font-size: 1.2em; opacity: 0.9; }
        .stats { display: flex; justify-content: center; gap: 30px; margin: 20px 0; flex-wrap: wrap; }
        .stat-box { background: rgba(255,255,255,0.2); padding: 15px 30px; border-radius: 10px; text-align: center; }
        .stat-number { font-size: 2em; font-weight: bold; }
        .stat-label { font-size: 0.9em; opacity: 0.8; }
        .search-filter {
            background: white;
            border-radius: 15px;
            padding: 25px;
            margin: 20px 0;
            box-shadow: 0 10px 40px rgba(0,0,0,0.1);
        }
        .search-box { display: flex; gap: 15px; flex-wrap: wrap; align-items: center; }
        .search-input {
            flex: 1;
            min-width: 300px;
            padding: 15px 20px;
            border: 2px solid #e0e0e0;
            border-radius: 10px;
            font-size: 1em;
        }
        .search-input:focus { outline: none; border-color: #667eea; }
        .category-filter {
            padding: 15px 20px;
            border: 2px solid #e0e0e0;
            border-radius: 10px;
            font-size: 1em;
            min-width: 250px;
            cursor: pointer;
        }
        .category-tags { display: flex; flex-wrap: wrap; gap: 10px; margin-top: 20px; }
        .category-tag {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 8px 16px;
            border-radius: 20px;
            font-size: 0.9em;
            cursor: pointer;
        }
        .category-tag.active { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); }
        .category-tag .count { background: rgba(255,255,255,0.3); padding: 2px 8px; border-radius: 10px; margin-left: 5px; }
        .results { margin-top: 20px; }
        .results-header { color: white; margin-bottom: 15px; font-size: 1.1em; }
        .divi-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(350px, 1fr)); gap: 20px; }
        .divi-card { background: white; border-radius: 15px; padding: 20px; box-shadow: 0 5px 20px rgba(0,0,0,0.1); }
        .divi-card.partner { border-left: 4px solid #f5576c; }
        .divi-link { text-decoration: none; color: inherit; display: block; }
        .divi-link:hover .divi-name { color: #667eea; }
        .divi-name { font-size: 1.1em; font-weight: 600; color: #333; margin-bottom: 10px; }
        .divi-categories { display: flex; flex-wrap: wrap; gap: 8px; }
        .divi-cat { background: #f0f0f0; padding: 5px 12px; border-radius: 15px; font-size: 0.85em; color: #666; }
        .partner-badge {
            background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%);
            color: white;
            padding: 5px 12px;
            border-radius: 15px;
            font-size: 0.85em;
        }
        .no-results { text-align: center; color: white; padding: 50px; font-size: 1.2em; }
        footer { text-align: center; color: white; padding: 30px 0; opacity: 0.8; }
        @media (max-width: 768px) {
            header h1 { font-size: 1.8em; }
            .divi-grid { grid-template-columns: 1fr; }
            .search-input { min-width: 100%; }
        }
"#;

const SCRIPT: &str = r#"        const searchInput = document.getElementById('searchInput');
        const categorySelect = document.getElementById('categorySelect');
        const categoryTags = document.querySelectorAll('.category-tag');
        const diviCards = document.querySelectorAll('.divi-card');
        const diviGrid = document.getElementById('diviGrid');
        const noResults = document.getElementById('noResults');
        const resultsHeader = document.getElementById('resultsHeader');
        const visibleDivisEl = document.getElementById('visibleDivis');

        function filterDivis() {
            const searchTerm = searchInput.value.toLowerCase();
            const selectedCategory = categorySelect.value.toLowerCase();
            let visibleCount = 0;

            diviCards.forEach(card => {
                const name = card.dataset.name;
                const categories = card.dataset.categories;
                const labels = categories ? categories.split('|') : [];

                const matchesSearch = name.includes(searchTerm) || categories.includes(searchTerm);
                const matchesCategory = !selectedCategory || labels.includes(selectedCategory);

                if (matchesSearch && matchesCategory) {
                    card.style.display = 'block';
                    visibleCount++;
                } else {
                    card.style.display = 'none';
                }
            });

            visibleDivisEl.textContent = visibleCount;
            noResults.style.display = visibleCount === 0 ? 'block' : 'none';
            diviGrid.style.display = visibleCount === 0 ? 'none' : 'grid';

            if (selectedCategory) {
                resultsHeader.textContent = `${categorySelect.value} (${visibleCount} Divi's)`;
            } else if (searchTerm) {
                resultsHeader.textContent = `Zoekresultaten voor "${searchInput.value}" (${visibleCount} Divi's)`;
            } else {
                resultsHeader.textContent = `Alle Divi's (${visibleCount})`;
            }
        }

        searchInput.addEventListener('input', filterDivis);
        categorySelect.addEventListener('change', () => {
            categoryTags.forEach(tag => {
                tag.classList.toggle('active', tag.dataset.category === categorySelect.value);
            });
            filterDivis();
        });

        categoryTags.forEach(tag => {
            tag.addEventListener('click', () => {
                const category = tag.dataset.category;
                if (categorySelect.value === category) {
                    categorySelect.value = '';
                    tag.classList.remove('active');
                } else {
                    categorySelect.value = category;
                    categoryTags.forEach(t => t.classList.remove('active'));
                    tag.classList.add('active');
                }
                filterDivis();
            });
        });
"#;

/// HTML特殊文字をエスケープ
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// カード検索用のカテゴリ値（小文字、区切り付き）
fn card_categories(item: &Item) -> String {
    if item.has_categories() {
        item.categories
            .iter()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(CATEGORY_DELIMITER)
    } else if item.partner {
        super::summary::PARTNER_BUCKET.to_lowercase()
    } else {
        String::new()
    }
}

fn push_card(html: &mut String, item: &Item) {
    let card_class = if item.partner { "divi-card partner" } else { "divi-card" };
    html.push_str(&format!(
        "                <div class=\"{}\" data-name=\"{}\" data-categories=\"{}\">\n",
        card_class,
        escape_html(&item.name.to_lowercase()),
        escape_html(&card_categories(item)),
    ));

    let name = format!("<div class=\"divi-name\">{}</div>", escape_html(&item.name));
    match &item.url {
        Some(url) => html.push_str(&format!(
            "                    <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"divi-link\">{}</a>\n",
            escape_html(url),
            name
        )),
        None => html.push_str(&format!("                    {}\n", name)),
    }

    html.push_str("                    <div class=\"divi-categories\">\n");
    for label in item.categories.iter() {
        html.push_str(&format!(
            "                        <span class=\"divi-cat\">{}</span>\n",
            escape_html(label)
        ));
    }
    if item.partner {
        html.push_str(&format!(
            "                        <span class=\"partner-badge\">{}</span>\n",
            PARTNER_MARKER
        ));
    }
    html.push_str("                    </div>\n");
    html.push_str("                </div>\n");
}

/// HTMLカタログを生成
pub fn render_html(catalog: &Catalog, options: &HtmlOptions) -> String {
    let index = category_index(catalog);
    let title = escape_html(&options.title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"nl\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", title));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");

    // ヘッダーと統計
    html.push_str("        <header>\n");
    html.push_str(&format!("            <h1>{}</h1>\n", title));
    html.push_str(&format!("            <p>{}</p>\n", escape_html(&options.subtitle)));
    html.push_str("            <div class=\"stats\">\n");
    for (id, value, label) in [
        ("totalDivis", catalog.len(), "Totaal Divi's"),
        ("totalCategories", index.len(), "Categorieën"),
        ("visibleDivis", catalog.len(), "Getoond"),
    ] {
        html.push_str("                <div class=\"stat-box\">\n");
        html.push_str(&format!(
            "                    <div class=\"stat-number\" id=\"{}\">{}</div>\n",
            id, value
        ));
        html.push_str(&format!("                    <div class=\"stat-label\">{}</div>\n", label));
        html.push_str("                </div>\n");
    }
    html.push_str("            </div>\n        </header>\n\n");

    // 検索・絞り込み
    html.push_str("        <div class=\"search-filter\">\n            <div class=\"search-box\">\n");
    html.push_str("                <input type=\"text\" class=\"search-input\" id=\"searchInput\" placeholder=\"Zoek een Divi...\">\n");
    html.push_str("                <select class=\"category-filter\" id=\"categorySelect\">\n");
    html.push_str("                    <option value=\"\">Alle Categorieën</option>\n");
    for (category, items) in &index {
        let category = escape_html(category);
        html.push_str(&format!(
            "                    <option value=\"{}\">{} ({})</option>\n",
            category,
            category,
            items.len()
        ));
    }
    html.push_str("                </select>\n            </div>\n");
    html.push_str("            <div class=\"category-tags\" id=\"categoryTags\">\n");
    for (category, items) in &index {
        let category = escape_html(category);
        html.push_str(&format!(
            "                <span class=\"category-tag\" data-category=\"{}\">{}<span class=\"count\">{}</span></span>\n",
            category,
            category,
            items.len()
        ));
    }
    html.push_str("            </div>\n        </div>\n\n");

    // カード一覧
    html.push_str("        <div class=\"results\">\n");
    html.push_str(&format!(
        "            <p class=\"results-header\" id=\"resultsHeader\">Alle Divi's ({})</p>\n",
        catalog.len()
    ));
    html.push_str("            <div class=\"divi-grid\" id=\"diviGrid\">\n");
    for item in catalog.items() {
        push_card(&mut html, item);
    }
    html.push_str("            </div>\n");
    html.push_str("            <div class=\"no-results\" id=\"noResults\" style=\"display: none;\">\n");
    html.push_str("                Geen Divi's gevonden voor deze zoekopdracht\n");
    html.push_str("            </div>\n        </div>\n\n");

    html.push_str(&format!(
        "        <footer>\n            <p>{}</p>\n        </footer>\n    </div>\n\n",
        escape_html(&options.footer)
    ));
    html.push_str("    <script>\n");
    html.push_str(SCRIPT);
    html.push_str("    </script>\n</body>\n</html>\n");

    html
}
