//! Shared UI components for the Dioxus fullstack web UI.

pub mod badge;
pub mod card;
pub mod dialog;
pub mod layout;
pub mod select;
pub mod sidebar;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod toaster;

pub use badge::{Badge, BadgeVariant};
pub use card::{Card, EmptyState, PageHeader, StatTile, TitledCard, UsageBar};
pub use dialog::{ConfirmDialog, Dialog};
pub use select::{Select, SelectOption};
pub use switch::Switch;
pub use table::{
    EmptyRow, Table, TableBody, TableCaption, TableCell, TableHead, TableHeader, TableRow,
};
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
pub use toaster::{use_toaster, Toaster};

pub const INPUT: &str = "flex h-10 w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-gray-950 disabled:cursor-not-allowed disabled:opacity-50";

pub const TEXTAREA: &str = "flex min-h-[120px] w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-gray-950";

pub const LABEL: &str = "text-sm font-medium text-gray-700";

/// Filled button in the subscriber orange.
pub const BUTTON_USER: &str = "inline-flex items-center justify-center gap-2 rounded-md bg-primary-user px-4 py-2 text-sm font-medium text-white transition-opacity hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-50";

/// Filled button in the administrator red.
pub const BUTTON_ADMIN: &str = "inline-flex items-center justify-center gap-2 rounded-md bg-primary-admin px-4 py-2 text-sm font-medium text-white transition-opacity hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-50";

pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center gap-2 rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50";

pub const BUTTON_SMALL_OUTLINE: &str = "inline-flex items-center justify-center gap-1 rounded-md border border-gray-300 bg-white px-2.5 py-1 text-xs font-medium text-gray-700 hover:bg-gray-50";
