//! Ticket domain module.

mod model;

pub use model::{
    INTEGRATION_STATUS_STUB, INTEGRATION_TARGET, Integration, Requester, Ticket, TicketPayload,
    generate_ticket_id,
};
