pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-amber-500 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-amber-500 transition-all duration-200";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg hover:shadow-xl p-6 transform hover:-translate-y-1 transition-all duration-300";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const BUTTON_SMALL: &str = "inline-flex items-center px-2 py-1 text-xs rounded-md font-medium";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";
pub const AUTH_CARD: &str = "bg-white/80 dark:bg-gray-900/80 rounded-xl shadow-xl p-8 max-w-md w-full mx-auto backdrop-blur-lg border border-gray-200/50 dark:border-gray-700/50";
pub const AUTH_HEADER: &str = "mb-6 text-center";
pub const AUTH_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50";
pub const SECTION_GRID: &str = "py-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6";
pub const GAME_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700 text-sm";
pub const TABLE_HEAD: &str = "px-4 py-2 text-left font-semibold text-gray-700 dark:text-gray-300";
pub const TABLE_CELL: &str = "px-4 py-2 text-gray-900 dark:text-gray-100";

pub const ALERT_STACK: &str = "fixed top-20 right-6 z-50 w-80 space-y-2";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const ALERT_INFO: &str = "bg-blue-50 dark:bg-blue-900/50 border border-blue-200 dark:border-blue-800 rounded-lg p-4 text-blue-700 dark:text-blue-200";
pub const ALERT_WARNING: &str = "bg-yellow-50 dark:bg-gray-900 border border-yellow-200 dark:border-yellow-800 rounded-lg p-4 text-yellow-800 dark:text-yellow-400";

pub const BADGE_SUCCESS: &str = "px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-300";
pub const BADGE_WARNING: &str = "px-2 py-0.5 rounded-full text-xs font-medium bg-yellow-100 text-yellow-800 dark:bg-yellow-900/40 dark:text-yellow-300";
pub const BADGE_DANGER: &str = "px-2 py-0.5 rounded-full text-xs font-medium bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-300";

pub const PAGE_LINK: &str = "px-3 py-1 rounded-md text-sm border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";
pub const PAGE_LINK_ACTIVE: &str = "px-3 py-1 rounded-md text-sm border border-blue-600 bg-blue-600 text-white";

// Slot machine
pub const SLOT_CABINET: &str = "rounded-2xl p-6 bg-gradient-to-b from-purple-900 to-indigo-950 shadow-2xl border-4 border-amber-400";
pub const SLOT_REELS: &str = "relative flex justify-center gap-2 p-3 rounded-xl bg-black/60";
pub const SLOT_REEL: &str = "flex flex-col w-20 rounded-lg bg-white dark:bg-gray-100 overflow-hidden";
pub const SLOT_REEL_SPINNING: &str = "blur-[1px]";
pub const SLOT_REEL_STOPPING: &str = "animate-bounce";
pub const SLOT_CELL: &str = "h-20 flex items-center justify-center text-5xl select-none";
pub const SLOT_CELL_PAYLINE: &str = "bg-amber-100";
pub const SLOT_CELL_WIN: &str = "ring-4 ring-inset ring-amber-400 animate-pulse";
pub const SLOT_CONTROLS: &str = "mt-4 flex flex-wrap items-center justify-center gap-3";
pub const SLOT_BET_INPUT: &str = "w-24 text-center rounded-lg py-2 px-3 bg-gray-900 text-amber-300 ring-1 ring-amber-400";
pub const SLOT_WIN_PANEL: &str = "mt-4 rounded-xl bg-black/50 p-4 text-amber-100";
pub const WIN_POPUP: &str = "fixed inset-0 z-50 flex items-center justify-center pointer-events-none";
pub const WIN_POPUP_CARD: &str = "rounded-2xl px-10 py-8 bg-gradient-to-br from-amber-300 to-yellow-500 text-gray-900 text-center shadow-2xl animate-bounce";
