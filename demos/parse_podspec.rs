use podspec_metadata::{Document, Podspec, PodspecFields};

const RUBY: &str = "\
Pod::Spec.new do |s|
  s.name         = 'Reachability'
  s.version      = '3.1.0'
  s.license      = 'BSD'
  s.homepage     = 'https://github.com/tonymillion/Reachability'
  s.authors      = { 'Tony Million' => 'tonymillion@gmail.com' }
  s.summary      = 'ARC and GCD Compatible Reachability Class for iOS and macOS.'
  s.source       = { :git => 'https://github.com/tonymillion/Reachability.git', :tag => 'v3.1.0' }
  s.source_files = 'Reachability.{h,m}'
  s.framework    = 'SystemConfiguration'
  s.requires_arc = true
end
";

const JSON: &str = r#"{
  "name": "BatteryHandlerSpec",
  "version": "0.0.2",
  "summary": "A suummary to help",
  "homepage": "https://github.com/MohamedJaffer-24/BatteryHandler",
  "license": "MIT",
  "authors": ["Jaffer", "Ann"],
  "source": {
    "git": "https://github.com/MohamedJaffer-24/BatteryHandler.git",
    "tag": "0.0.2"
  }
}"#;

fn print_podspec(podspec: &Podspec) {
    println!("Name:      {}", podspec.name);
    println!("Version:   {}", podspec.version);
    println!("License:   {}", podspec.license);
    println!("Homepage:  {}", podspec.homepage);
    println!("Summary:   {}", podspec.summary);
    println!("Authors:");
    for (name, email) in &podspec.authors {
        match email {
            Some(email) => println!("  {} <{}>", name, email),
            None => println!("  {}", name),
        }
    }
    println!("Source:");
    for (kind, value) in &podspec.source {
        println!("  {} -> {}", kind, value);
    }
}

fn main() {
    for input in [RUBY, JSON] {
        let document = Document::sniff(input.as_bytes()).expect("failed to read podspec");
        println!("=== {} podspec ===", document.format());
        let podspec = document.to_podspec().expect("failed to extract metadata");
        print_podspec(&podspec);
        println!();
    }
}
