pub mod agent_list_response;
pub mod agent_response;
pub mod agents;
pub mod create_agent_request;
pub mod update_agent_request;
