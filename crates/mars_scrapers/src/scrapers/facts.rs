use askama::Template;
use mars_core::{bounded, Error, PageFetcher, Result, ScrapeConfig};
use scraper::{ElementRef, Html};
use serde::Serialize;
use crate::logging::Logger;
use super::{absent_on_miss, utils};

pub const INDEX_NAME: &str = "description";
pub const COLUMNS: [&str; 2] = ["Mars", "Earth"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRow {
    pub description: String,
    pub mars: String,
    pub earth: String,
}

/// The comparison table, keyed by its description column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactsTable {
    pub rows: Vec<FactRow>,
}

/// Dataframe-style layout: an index column of `<th>` row keys followed by
/// the `Mars` and `Earth` columns.
#[derive(Template)]
#[template(path = "facts.html")]
struct FactsTemplate<'a> {
    class: &'a str,
    columns: [&'a str; 2],
    index_name: &'a str,
    rows: &'a [FactRow],
}

/// Fetches the facts page and renders its first table for embedding.
///
/// Needs no browser. Any fetch failure or unusable table yields `None`.
pub async fn mars_facts<F>(fetcher: &F, config: &ScrapeConfig) -> Result<Option<String>>
where
    F: PageFetcher + ?Sized,
{
    let logger = Logger::new().with_prefix("[facts]");
    let result = async {
        let markup = bounded(config.op_timeout, "fetch facts page", fetcher.fetch(&config.facts_url)).await?;
        let table = FactsTable::parse(&markup)?;
        logger.info(&format!("{} rows", table.rows.len()));
        table.to_html(&config.facts_table_class)
    }
    .await;
    absent_on_miss(&logger, result)
}

impl FactsTable {
    /// Reads the first `<table>` of `markup`. Rows of tables nested inside
    /// it are not part of it.
    ///
    /// Header rows are the `<thead>` rows, or when there is no `<thead>` the
    /// leading rows made only of `<th>` cells. Every other row must have
    /// exactly three cells.
    pub fn parse(markup: &str) -> Result<Self> {
        let document = Html::parse_document(markup);
        let table = utils::first(&document, "table")?;
        let table_rows = own_rows(table);

        let has_thead = table_rows.iter().any(|(section, _)| *section == "thead");
        let mut in_leading_header = !has_thead;
        let mut rows = Vec::new();

        for (section, row) in table_rows {
            let cells = children_named(row, &["th", "td"]);
            if cells.is_empty() {
                continue;
            }
            let all_th = cells.iter().all(|c| c.value().name() == "th");
            let header = if has_thead {
                section == "thead"
            } else {
                in_leading_header = in_leading_header && all_th;
                in_leading_header
            };
            if header {
                continue;
            }

            let texts: Vec<String> = cells.into_iter().map(utils::text_of).collect();
            let [description, mars, earth]: [String; 3] = texts.try_into().map_err(|texts: Vec<String>| {
                Error::ElementNotFound(format!("three-column row (found {} cells)", texts.len()))
            })?;
            rows.push(FactRow { description, mars, earth });
        }

        if rows.is_empty() {
            return Err(Error::ElementNotFound("facts table rows".to_string()));
        }
        Ok(Self { rows })
    }

    pub fn to_html(&self, class: &str) -> Result<String> {
        FactsTemplate {
            class,
            columns: COLUMNS,
            index_name: INDEX_NAME,
            rows: &self.rows,
        }
        .render()
        .map_err(|e| Error::External(e.into()))
    }
}

/// `<tr>` elements belonging to `table` itself, tagged with the section
/// (`thead`, `tbody`, `tfoot` or `table`) they sit in.
fn own_rows(table: ElementRef<'_>) -> Vec<(&str, ElementRef<'_>)> {
    let mut rows = Vec::new();
    for child in children_named(table, &["tr", "thead", "tbody", "tfoot"]) {
        match child.value().name() {
            "tr" => rows.push(("table", child)),
            section => rows.extend(children_named(child, &["tr"]).into_iter().map(|tr| (section, tr))),
        }
    }
    rows
}

fn children_named<'a>(element: ElementRef<'a>, names: &[&str]) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| names.contains(&child.value().name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fakes::FakeFetcher;
    use crate::tests::fixtures::{self, FACTS_URL};
    use scraper::Selector;

    #[test]
    fn test_parse_headerless_table() {
        let table = FactsTable::parse(fixtures::FACTS_PAGE).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(
            table.rows[0],
            FactRow {
                description: "Mars - Earth Comparison".to_string(),
                mars: "Mars".to_string(),
                earth: "Earth".to_string(),
            }
        );
        assert_eq!(table.rows[1].description, "Diameter:");
        assert_eq!(table.rows[1].earth, "12,742 km");
    }

    #[test]
    fn test_parse_drops_thead_rows() {
        let markup = r#"
            <table>
              <thead><tr><th>Property</th><th>Red</th><th>Blue</th></tr></thead>
              <tbody>
                <tr><th>Moons:</th><td>2</td><td>1</td></tr>
              </tbody>
            </table>
            <table><tr><td>ignored</td><td>x</td><td>y</td></tr></table>
        "#;
        let table = FactsTable::parse(markup).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].description, "Moons:");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let markup = "<table><tr><td>a</td><td>b</td></tr></table>";
        assert!(matches!(FactsTable::parse(markup), Err(Error::ElementNotFound(_))));
        assert!(matches!(FactsTable::parse("<p>no table</p>"), Err(Error::ElementNotFound(_))));
    }

    #[test]
    fn test_rendered_shape() {
        let table = FactsTable::parse(fixtures::FACTS_PAGE).unwrap();
        let html = table.to_html("table table-striped").unwrap();
        assert!(html.starts_with(r#"<table border="1" class="dataframe table table-striped">"#));

        let document = Html::parse_fragment(&html);
        let header = Selector::parse("thead tr:first-child th").unwrap();
        let headers: Vec<String> = document.select(&header).map(|th| th.text().collect()).collect();
        assert_eq!(headers, vec!["", "Mars", "Earth"]);

        let body_rows = Selector::parse("tbody tr").unwrap();
        let row_key = Selector::parse("th").unwrap();
        let data_cell = Selector::parse("td").unwrap();
        let mut keys = Vec::new();
        for row in document.select(&body_rows) {
            keys.push(row.select(&row_key).next().unwrap().text().collect::<String>());
            assert_eq!(row.select(&data_cell).count(), 2);
        }
        let expected: Vec<String> = table.rows.iter().map(|r| r.description.clone()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_rendering_escapes_cells() {
        let table = FactsTable {
            rows: vec![FactRow {
                description: "Temp <min>".to_string(),
                mars: "-153 & up".to_string(),
                earth: "\"-88\"".to_string(),
            }],
        };
        let html = table.to_html("t").unwrap();
        assert!(html.contains("<th>Temp &lt;min&gt;</th>"));
        assert!(html.contains("<td>-153 &amp; up</td>"));
        assert!(html.contains("<td>&quot;-88&quot;</td>"));
    }

    #[test]
    fn test_parse_skips_nested_table_rows() {
        let markup = r#"
            <table>
              <tr><td>Moons:</td><td>2 <table><tr><td>Phobos</td></tr><tr><td>Deimos</td></tr></table></td><td>1</td></tr>
              <tr><td>Rings:</td><td>0</td><td>0</td></tr>
            </table>
        "#;
        let table = FactsTable::parse(markup).unwrap();
        let keys: Vec<&str> = table.rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(keys, vec!["Moons:", "Rings:"]);
        assert_eq!(table.rows[0].earth, "1");
    }

    #[tokio::test]
    async fn test_mars_facts() {
        let fetcher = FakeFetcher::new().page(FACTS_URL, fixtures::FACTS_PAGE);
        let facts = mars_facts(&fetcher, &fixtures::config()).await.unwrap().unwrap();
        assert!(facts.contains("<th>Diameter:</th>"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absence() {
        let fetcher = FakeFetcher::new();
        assert_eq!(mars_facts(&fetcher, &fixtures::config()).await.unwrap(), None);
    }
}
