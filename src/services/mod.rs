/*
 * Responsibility
 * - domain-side helpers handlers compose: auth gate, id codec, blank suppression, ownership
 */
pub mod auth;
pub mod blank_fields;
pub mod id_codec;
pub mod ownership;
