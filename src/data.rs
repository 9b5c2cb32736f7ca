//! Transaction loading and one-hot encoding of the transaction database

use crate::itemset::Itemset;
use anyhow::Context;
use ndarray::Array2;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;

/// Read-only transaction database
#[derive(Debug, Clone)]
pub struct TransactionDb {
    /// Transactions in input order
    transactions: Vec<Itemset>,
    /// Sorted distinct items; position is the column in `encoded`
    items: Vec<String>,
    /// One-hot matrix (n_transactions, n_items)
    encoded: Array2<bool>,
}

impl TransactionDb {
    /// Build a database from in-memory rows
    ///
    /// Labels are taken as given; use [`normalize_item`] first when the rows
    /// come from user input.
    pub fn from_transactions<I, T, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transactions: Vec<Itemset> = rows.into_iter().map(Itemset::from_items).collect();

        let items: Vec<String> = transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut encoded = Array2::from_elem((transactions.len(), items.len()), false);
        for (row, transaction) in transactions.iter().enumerate() {
            for item in transaction {
                if let Ok(col) = items.binary_search(item) {
                    encoded[[row, col]] = true;
                }
            }
        }

        Self {
            transactions,
            items,
            encoded,
        }
    }

    pub fn total_transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Itemset] {
        &self.transactions
    }

    /// Distinct items across all transactions, sorted
    pub fn distinct_items(&self) -> &[String] {
        &self.items
    }

    /// Column of `item` in the encoded matrix
    pub fn item_index(&self, item: &str) -> Option<usize> {
        self.items.binary_search_by(|probe| probe.as_str().cmp(item)).ok()
    }

    pub fn encoded(&self) -> &Array2<bool> {
        &self.encoded
    }
}

/// Trim and upper-case a raw token; empty tokens yield `None`
pub fn normalize_item(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_uppercase())
    }
}

/// Parse comma-delimited transactions, one per line, no header
///
/// Quoted fields may contain commas. Rows may have any number of fields.
/// Blank lines are skipped and duplicate items within a line collapse.
pub fn parse_transactions<R: Read>(reader: R) -> crate::Result<TransactionDb> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (record_no, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read record {}", record_no + 1))?;
        let row: Vec<String> = record.iter().filter_map(normalize_item).collect();
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        anyhow::bail!("No transactions found in input");
    }

    Ok(TransactionDb::from_transactions(rows))
}

/// Load a transaction file from disk
///
/// # Arguments
/// * `file_path` - Path to a header-less file with comma separated items per line
///
/// # Returns
/// * `TransactionDb` with normalized items
pub fn load_transactions(file_path: &str) -> crate::Result<TransactionDb> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open transaction file: {}", file_path))?;
    parse_transactions(file)
        .with_context(|| format!("Failed to parse transaction file: {}", file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bread, milk").unwrap();
        writeln!(file, "Bread,Diapers,Beer,Eggs").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "milk,diapers,beer,cola,,").unwrap();
        writeln!(file, "bread,milk,diapers,beer,BEER").unwrap();
        file
    }

    #[test]
    fn test_load_transactions() {
        let test_file = create_test_csv();
        let file_path = test_file.path().to_str().unwrap();

        let db = load_transactions(file_path).unwrap();
        assert_eq!(db.total_transaction_count(), 4);
        assert_eq!(
            db.distinct_items(),
            &["BEER", "BREAD", "COLA", "DIAPERS", "EGGS", "MILK"]
        );
        // duplicate BEER collapses
        assert_eq!(db.transactions()[3].len(), 4);
    }

    #[test]
    fn test_encoded_matrix() {
        let db = TransactionDb::from_transactions(vec![vec!["A", "B"], vec!["B", "C"]]);
        let encoded = db.encoded();

        assert_eq!(encoded.shape(), &[2, 3]);
        let b = db.item_index("B").unwrap();
        assert!(encoded[[0, b]] && encoded[[1, b]]);
        assert!(!encoded[[0, db.item_index("C").unwrap()]]);
        assert_eq!(db.item_index("Z"), None);
    }

    #[test]
    fn test_normalize_item() {
        assert_eq!(normalize_item("  eggs "), Some("EGGS".to_string()));
        assert_eq!(normalize_item("   "), None);
    }

    #[test]
    fn test_quoted_fields() {
        let input = "\"eggs, large\",milk\nbread,\"milk\"\n";
        let db = parse_transactions(input.as_bytes()).unwrap();

        assert_eq!(db.total_transaction_count(), 2);
        assert_eq!(
            db.transactions()[0],
            Itemset::from_items(["EGGS, LARGE", "MILK"])
        );
        assert_eq!(db.distinct_items(), &["BREAD", "EGGS, LARGE", "MILK"]);
    }

    #[test]
    fn test_empty_input_is_error() {
        let input = "\n , \n\n";
        assert!(parse_transactions(input.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_transactions("/nonexistent/transactions.csv").is_err());
    }
}
