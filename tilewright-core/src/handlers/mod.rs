mod command_handler;
mod commit_handler;
mod pointer_handler;
mod property_handler;
mod structure_handler;
mod topology_handler;
mod track_handler;
mod window_event_handler;
