pub mod bot;
pub mod policy;

pub use bot::{
    BotParams, CardToPlay, Decision, ElevenPlanner, PlayIntent, PlayPlanner, RaisePlanner,
    RaiseResponse, ResponsePlanner,
};
pub use policy::{DecisionError, MachinePolicy, Policy};
