use sled::{Db, IVec};

const TREE_NAME: &str = "wallet_watchlist";
const WALLETS_KEY: &[u8] = b"wallets";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyTracked,
}

/// Persisted list of tracked wallet addresses. Entries are unique; a
/// duplicate add is a no-op surfaced to the caller as `AlreadyTracked`.
#[derive(Clone)]
pub struct Watchlist {
    tree: sled::Tree,
}

impl Watchlist {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { tree })
    }

    pub fn all(&self) -> Vec<String> {
        self.tree
            .get(WALLETS_KEY)
            .ok()
            .flatten()
            .and_then(|ivec: IVec| bincode::deserialize(&ivec).ok())
            .unwrap_or_default()
    }

    pub fn add(&self, address: &str) -> sled::Result<AddOutcome> {
        let mut wallets = self.all();

        if wallets.iter().any(|wallet| wallet == address) {
            return Ok(AddOutcome::AlreadyTracked);
        }

        wallets.push(address.to_string());
        self.store(&wallets)?;

        Ok(AddOutcome::Added)
    }

    pub fn remove(&self, address: &str) -> sled::Result<bool> {
        let mut wallets = self.all();
        let before = wallets.len();

        wallets.retain(|wallet| wallet != address);

        if wallets.len() == before {
            return Ok(false);
        }

        self.store(&wallets)?;
        Ok(true)
    }

    fn store(&self, wallets: &Vec<String>) -> sled::Result<()> {
        let encoded = bincode::serialize(wallets).unwrap();
        self.tree.insert(WALLETS_KEY, encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_watchlist() -> (Watchlist, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = sled::open(temp_dir.path()).unwrap();
        let watchlist = Watchlist::new(&db).unwrap();
        (watchlist, temp_dir)
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let (watchlist, _temp) = create_test_watchlist();

        watchlist.add("0xAA").unwrap();
        let before = watchlist.all();

        assert_eq!(watchlist.add("0xBB").unwrap(), AddOutcome::Added);
        assert!(watchlist.remove("0xBB").unwrap());

        assert_eq!(watchlist.all(), before);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let (watchlist, _temp) = create_test_watchlist();

        assert_eq!(watchlist.add("0xAA").unwrap(), AddOutcome::Added);
        assert_eq!(watchlist.add("0xAA").unwrap(), AddOutcome::AlreadyTracked);

        assert_eq!(watchlist.all(), vec!["0xAA".to_string()]);
    }

    #[test]
    fn test_remove_unknown_returns_false() {
        let (watchlist, _temp) = create_test_watchlist();

        watchlist.add("0xAA").unwrap();

        assert!(!watchlist.remove("0xBB").unwrap());
        assert_eq!(watchlist.all(), vec!["0xAA".to_string()]);
    }
}
