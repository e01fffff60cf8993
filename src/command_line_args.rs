// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::process;

use crate::config::MiningConfig;
use argparse::{ArgumentParser, Store};

pub struct Arguments {
    pub input_file_path: String,
    pub output_itemsets_path: String,
    pub output_rules_path: String,
    pub config: MiningConfig,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_itemsets_path: String::new(),
        output_rules_path: String::new(),
        config: MiningConfig::default(),
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Light weight parallel FPGrowth in Rust.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input transaction list in CSV format; one transaction of \
                 comma separated item names per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--output-itemsets"],
                Store,
                "File path in which to store the frequent itemsets. \
                 Format: items, count, support, size.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output-rules"],
                Store,
                "File path in which to store output rules. Format: \
                 antecedent, consequent, support, confidence, lift, leverage.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.config.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, a fraction in (0,1]. \
                 Defaults to 0.01.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.config.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, a fraction in (0,1]. \
                 Defaults to 0.3.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.config.min_lift)
            .add_option(
                &["--min-lift"],
                Store,
                "Minimum rule lift threshold, a positive ratio. \
                 Defaults to 1.2.",
            )
            .metavar("threshold");

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    args
}
