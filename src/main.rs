fn main() {
    zune_dc6_bin::main()
}
