mod simulated_contact_sender;

pub use simulated_contact_sender::SimulatedContactSender;
