//! CLI command parsing and utility tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`), input
//! validation, and the artifact pipeline the search command drives.

// ============================================================================
// Input validation tests
// ============================================================================

mod input_validation {
    use mimir_qram::{LookupTable, Target};

    #[test]
    fn test_parse_valid_table() {
        let table: LookupTable = "1010".parse().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.address_bits(), 2);
    }

    #[test]
    fn test_parse_invalid_table_length() {
        assert!("101".parse::<LookupTable>().is_err());
        assert!("1".parse::<LookupTable>().is_err());
    }

    #[test]
    fn test_parse_invalid_table_character() {
        assert!("10x0".parse::<LookupTable>().is_err());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!("1".parse::<Target>().unwrap(), Target::One);
        assert_eq!("0".parse::<Target>().unwrap(), Target::Zero);
        assert!("2".parse::<Target>().is_err());
        assert!("".parse::<Target>().is_err());
    }
}

// ============================================================================
// Artifact pipeline tests
// ============================================================================

mod artifacts {
    use mimir_adapter_sv::SvExecutor;
    use mimir_hal::Executor;
    use mimir_ir::render::render;
    use mimir_qram::{
        LookupTable, Target, diffuser_circuit, grover_circuit, lookup_circuit, oracle_circuit,
        render_histogram,
    };
    use std::fs;

    #[test]
    fn test_search_artifacts_written() {
        let dir = tempfile::tempdir().unwrap();
        let table: LookupTable = "1010".parse().unwrap();

        let lookup = lookup_circuit(&table).unwrap();
        let oracle = oracle_circuit(&table, Target::One).unwrap();
        let diffuser = diffuser_circuit(table.address_bits()).unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();

        let executor = SvExecutor::new();
        let result = executor.run(&circuit, 400).unwrap();

        for (name, contents) in [
            ("lookup_gate.txt", render(&lookup)),
            ("oracle.txt", render(&oracle)),
            ("diffuser.txt", render(&diffuser)),
            ("grover_iteration.txt", render(&circuit)),
            (
                "measurement_histogram.txt",
                render_histogram(&result.counts, 400),
            ),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, &contents).unwrap();
            let read_back = fs::read_to_string(&path).unwrap();
            assert!(!read_back.is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_histogram_artifact_has_header() {
        let table: LookupTable = "1010".parse().unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();
        let result = SvExecutor::new().run(&circuit, 400).unwrap();

        let histogram = render_histogram(&result.counts, 400);
        assert!(histogram.starts_with("Address | Count | Probability | Bar"));
    }

    #[test]
    fn test_rendered_search_circuit_lists_registers() {
        let table: LookupTable = "1010".parse().unwrap();
        let circuit = grover_circuit(&table, Target::One).unwrap();
        let rendered = render(&circuit);

        assert!(rendered.contains("addr[0]"));
        assert!(rendered.contains("out[0]"));
        assert!(rendered.contains("measure"));
    }
}

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "mimir")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Search {
            #[arg(short, long, default_value = "1010")]
            data: String,
            #[arg(short, long, default_value = "1")]
            target: String,
            #[arg(short, long, default_value = "4000")]
            shots: u32,
            #[arg(short, long, default_value = "figures")]
            out_dir: String,
            #[arg(long)]
            json: bool,
        },
        Resources {
            #[arg(short, long, default_value = "1010")]
            data: String,
            #[arg(short, long, default_value = "1")]
            target: String,
        },
        Version,
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = TestCli::try_parse_from(["mimir", "search"]).unwrap();
        match cli.command {
            TestCommands::Search {
                data,
                target,
                shots,
                out_dir,
                json,
            } => {
                assert_eq!(data, "1010");
                assert_eq!(target, "1");
                assert_eq!(shots, 4000);
                assert_eq!(out_dir, "figures");
                assert!(!json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_parse_search_with_all_args() {
        let cli = TestCli::try_parse_from([
            "mimir", "search", "-d", "00010000", "-t", "0", "-s", "2000", "-o", "results",
            "--json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Search {
                data,
                target,
                shots,
                out_dir,
                json,
            } => {
                assert_eq!(data, "00010000");
                assert_eq!(target, "0");
                assert_eq!(shots, 2000);
                assert_eq!(out_dir, "results");
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_parse_resources() {
        let cli = TestCli::try_parse_from(["mimir", "resources", "-d", "0110"]).unwrap();
        match cli.command {
            TestCommands::Resources { data, target } => {
                assert_eq!(data, "0110");
                assert_eq!(target, "1");
            }
            _ => panic!("Expected Resources command"),
        }
    }

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["mimir", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = TestCli::try_parse_from(["mimir", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_subcommand() {
        let result = TestCli::try_parse_from(["mimir"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        let result = TestCli::try_parse_from(["mimir", "foobar"]);
        assert!(result.is_err());
    }
}
