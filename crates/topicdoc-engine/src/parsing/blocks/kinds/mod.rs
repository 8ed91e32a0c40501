//! Block kinds that own their line-level syntax.

pub mod bullet;
pub mod callout;
pub mod code_fence;
pub mod numbered;

pub use bullet::Bullet;
pub use callout::Callout;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use numbered::Numbered;
