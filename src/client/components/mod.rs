pub mod champion_form;
pub mod hero_card;
pub mod history;
pub mod navbar;
pub mod page;

pub use champion_form::ChampionFormModal;
pub use hero_card::HeroCard;
pub use history::HistorySection;
pub use navbar::Navbar;
pub use page::Page;
