//! Human-readable statistics over the exported records.

use colored::*;

use crate::domain::entities::{Catalogue, Link};

/// Link count for one catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueTally {
    pub name: String,
    pub links: usize,
}

/// The link with the highest click count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostClicked {
    pub id: i64,
    pub description: Option<String>,
    pub clicks: i64,
}

/// Statistics printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// One entry per catalogue, in catalogue order.
    pub catalogues: Vec<CatalogueTally>,
    pub total_links: usize,
    /// Sum of all click counters. NULL counters contribute nothing.
    pub total_clicks: i128,
    /// `None` when no link has a click counter.
    pub most_clicked: Option<MostClicked>,
}

impl ExportSummary {
    pub fn from_records(catalogues: &[Catalogue], links: &[Link]) -> Self {
        let tallies = catalogues
            .iter()
            .map(|cat| CatalogueTally {
                name: cat.display_name().to_string(),
                links: links.iter().filter(|l| l.belongs_to(cat.id)).count(),
            })
            .collect();

        let total_clicks = links
            .iter()
            .filter_map(|l| l.clicks)
            .map(i128::from)
            .sum();

        // First link wins on ties.
        let most_clicked = links
            .iter()
            .filter_map(|l| l.clicks.map(|clicks| (l, clicks)))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map(|(l, clicks)| MostClicked {
                id: l.id,
                description: l.description.clone(),
                clicks,
            });

        Self {
            catalogues: tallies,
            total_links: links.len(),
            total_clicks,
            most_clicked,
        }
    }

    /// Prints the summary block to stdout.
    ///
    /// # Output Format
    ///
    /// ```text
    /// ==================================================
    /// EXPORT SUMMARY
    /// ==================================================
    /// Catalogues: 2
    ///    - Work: 2 links
    ///    - Home: 1 links
    ///
    /// Total Links: 3
    /// Total Clicks: 18
    /// Most clicked: Rust docs (10 clicks)
    /// ```
    pub fn print(&self) {
        let rule = "=".repeat(50);

        println!();
        println!("{}", rule.bright_black());
        println!("{}", "EXPORT SUMMARY".bright_blue().bold());
        println!("{}", rule.bright_black());

        println!(
            "Catalogues: {}",
            self.catalogues.len().to_string().bright_white().bold()
        );
        for tally in &self.catalogues {
            println!("   - {}: {} links", tally.name.cyan(), tally.links);
        }

        println!();
        println!(
            "Total Links: {}",
            self.total_links.to_string().bright_green().bold()
        );
        println!(
            "Total Clicks: {}",
            self.total_clicks.to_string().bright_green().bold()
        );

        if let Some(top) = &self.most_clicked {
            println!(
                "Most clicked: {} ({} clicks)",
                top.description.as_deref().unwrap_or_default().bright_yellow(),
                top.clicks
            );
        }
    }
}

/// Computes and prints the summary for the exported records.
pub fn summarize(catalogues: &[Catalogue], links: &[Link]) -> ExportSummary {
    let summary = ExportSummary::from_records(catalogues, links);
    summary.print();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Catalogue>, Vec<Link>) {
        let catalogues = vec![
            Catalogue::new(1, "Work", None, "#ff0000", "2024-01-01"),
            Catalogue::new(2, "Home", None, "#00ff00", "2024-01-02"),
        ];
        let links = vec![
            Link::new(1, 1, "https://a.example", "A", 5, "2024-01-03"),
            Link::new(2, 1, "https://b.example", "B", 10, "2024-01-04"),
            Link::new(3, 2, "https://c.example", "C", 3, "2024-01-05"),
        ];
        (catalogues, links)
    }

    #[test]
    fn test_counts_and_totals() {
        let (catalogues, links) = fixture();

        let summary = ExportSummary::from_records(&catalogues, &links);

        assert_eq!(
            summary.catalogues,
            vec![
                CatalogueTally {
                    name: "Work".to_string(),
                    links: 2
                },
                CatalogueTally {
                    name: "Home".to_string(),
                    links: 1
                },
            ]
        );
        assert_eq!(summary.total_links, 3);
        assert_eq!(summary.total_clicks, 18);
        assert_eq!(summary.most_clicked.unwrap().clicks, 10);
    }

    #[test]
    fn test_tie_keeps_first_link() {
        let links = vec![
            Link::new(1, 1, "https://a.example", "First", 7, "2024-01-01"),
            Link::new(2, 1, "https://b.example", "Second", 7, "2024-01-02"),
        ];

        let summary = ExportSummary::from_records(&[], &links);

        let top = summary.most_clicked.unwrap();
        assert_eq!(top.id, 1);
        assert_eq!(top.description.as_deref(), Some("First"));
    }

    #[test]
    fn test_large_click_counters_do_not_overflow() {
        let links = vec![
            Link::new(1, 1, "https://a.example", "A", i64::MAX, "2024-01-01"),
            Link::new(2, 1, "https://b.example", "B", i64::MAX, "2024-01-02"),
        ];

        let summary = ExportSummary::from_records(&[], &links);

        assert_eq!(summary.total_clicks, 2 * i128::from(i64::MAX));
        assert_eq!(summary.most_clicked.unwrap().id, 1);
    }

    #[test]
    fn test_null_clicks_are_skipped() {
        let links = vec![
            Link {
                clicks: None,
                ..Link::new(1, 1, "https://a.example", "A", 0, "2024-01-01")
            },
            Link::new(2, 1, "https://b.example", "B", 2, "2024-01-02"),
        ];

        let summary = ExportSummary::from_records(&[], &links);

        assert_eq!(summary.total_clicks, 2);
        assert_eq!(summary.most_clicked.unwrap().id, 2);
    }

    #[test]
    fn test_no_links_skips_most_clicked() {
        let (catalogues, _) = fixture();

        let summary = summarize(&catalogues, &[]);

        assert!(summary.most_clicked.is_none());
        assert_eq!(summary.total_clicks, 0);
        assert!(summary.catalogues.iter().all(|t| t.links == 0));
    }

    #[test]
    fn test_orphans_count_toward_totals_only() {
        let (catalogues, mut links) = fixture();
        links.push(Link::new(4, 42, "https://d.example", "D", 1, "2024-01-06"));

        let summary = ExportSummary::from_records(&catalogues, &links);

        let per_catalogue: usize = summary.catalogues.iter().map(|t| t.links).sum();
        assert_eq!(per_catalogue, 3);
        assert_eq!(summary.total_links, 4);
        assert_eq!(summary.total_clicks, 19);
    }
}
