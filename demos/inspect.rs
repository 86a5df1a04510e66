//! Print the structure of a TensorFlow model
//!
//! Usage: cargo run --example inspect -- <model.pb> [tf-operator.json]
//!
//! Set `RUST_LOG=debug` to see graph construction summaries.

use std::env;
use std::process::ExitCode;

use tfgraph_viewer::prelude::*;

fn print_graph(graph: &Graph) {
    println!("== {} ==", graph.name());

    for node in graph.nodes() {
        println!("{} [{}]", node.name(), node.operator());
        for input in node.inputs() {
            println!("  in  {} = {} {}", input.name, input.id, input.type_name);
        }
        for output in node.outputs() {
            println!("  out {} = {}", output.name, output.id);
        }
        for attr in node.attributes() {
            println!("  attr {} = {}", attr.name(), attr.value());
        }
    }

    for tensor in graph.initializers() {
        println!("{} ({}) {}", tensor.id(), tensor.title(), tensor.type_name());
    }

    for issue in graph.issues() {
        println!("issue: {:?}", issue);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: inspect <model.pb> [tf-operator.json]");
        return ExitCode::FAILURE;
    };

    let mut loader = ModelLoader::default();
    if let Some(schema_path) = args.get(1) {
        loader = loader.with_schema_source(FileSchemaSource::new(schema_path));
        loader.wait_for_schemas();
    }

    let model = match load_model(path, &loader) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match model.summary().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", e),
    }
    for graph in model.graphs() {
        print_graph(graph);
    }

    ExitCode::SUCCESS
}
