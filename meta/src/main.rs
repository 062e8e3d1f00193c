fn main() {
    multiversx_sc_meta_lib::cli_main::<confidential_tips::AbiProvider>();
}
