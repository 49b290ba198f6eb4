//! User directory views: the list, its cards, and the search input.

mod card;
mod detail_item;
mod list;
mod search_bar;

pub(crate) use card::UserCard;
pub(crate) use detail_item::UserDetailItem;
pub(crate) use list::UserList;
pub(crate) use search_bar::SearchBar;
