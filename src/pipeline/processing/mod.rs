// Pipeline processing: typed tables and the derived columns built on them

pub mod attention;
pub mod flow_graph;
pub mod ownership;
pub mod rows;

pub use attention::compute_attention_index;
pub use flow_graph::{build_flow_graph_index, FlowGraph};
pub use ownership::parse_percentage;
pub use rows::FromTable;
