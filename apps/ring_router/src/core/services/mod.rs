pub mod command_parser_service;
pub mod request_controller_service;

pub use command_parser_service::CommandParserService;
pub use request_controller_service::RequestControllerService;
