//! Shared Tailwind class constants for the directory views.

pub struct Theme;

impl Theme {
    /// Card container; `group` lets icons react to hovering the whole card.
    pub const CARD: &'static str = "group flex flex-col gap-4 rounded-lg border border-gray-200 bg-white p-6 shadow-sm transition-colors hover:border-blue-500 dark:border-gray-700 dark:bg-gray-800 dark:hover:border-blue-500";

    /// Round badge holding a user's initials.
    pub const AVATAR: &'static str = "flex h-12 w-12 shrink-0 items-center justify-center rounded-full bg-blue-100 text-lg font-semibold text-blue-700 dark:bg-blue-900/40 dark:text-blue-300";

    /// Small icon that darkens when its card is hovered.
    pub const ICON_SMALL: &'static str = "material-symbols-outlined text-gray-400 dark:text-gray-500 text-sm group-hover:text-gray-900 dark:group-hover:text-white transition-colors";

    pub const LINK: &'static str = "truncate text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

    pub const GRID: &'static str = "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3";
}
