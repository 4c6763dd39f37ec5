use cabal_core::ai::AI;
use cabal_core::market::Market;
use cabal_core::watchlist::Watchlist;

#[derive(Clone)]
pub struct ServerState {
    ai: AI,
    market: Market,
    watchlist: Watchlist,
}

impl From<(AI, Market, Watchlist)> for ServerState {
    fn from(states: (AI, Market, Watchlist)) -> Self {
        let (ai, market, watchlist) = states;
        Self {
            ai,
            market,
            watchlist,
        }
    }
}

impl ServerState {
    pub fn ai(&self) -> &AI {
        &self.ai
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }
}
