//! Wire types for the interaction endpoint

mod requests;
mod responses;

pub use requests::{
    CommandData, CommandOption, GameUpdate, Interaction, InteractionKind, Member, OptionValue,
    User,
};
pub use responses::InteractionReply;
