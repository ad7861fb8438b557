/**
 * Responsibility
 *  - declare the per-resource "typed public id" aliases
 *  - no decode logic here (see core)
 */
use super::core::PublicId;

// lists
pub enum ListTag {}
pub type PublicListId = PublicId<ListTag>;
